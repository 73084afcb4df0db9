// src/noyau/tampon.rs
//
// Machine d’état du tampon d’affichage : (tampon, touche) -> nouveau tampon.
// Fonction pure ; la cellule mutable vit côté UI (app/etat.rs).
//
// Règles, par priorité (la première qui s’applique gagne) :
//  1. AC            -> "0"
//  2. ⏎             -> retire le dernier caractère ("0" si vide)
//  3. op après op   -> remplace l’opérateur final (un signe seul "-" reste un signe)
//  4. +/-           -> retire ou ajoute le '-' de tête ("-" seul => "0")
//  5. =             -> évaluation ; échec => tampon inchangé
//  6. tampon "0" + chiffre/point -> on repart de vide
//  7. chiffre       -> ajout
//  8. opérateur     -> ajout si le dernier caractère n’est pas un opérateur
//  9. point         -> ajout si le segment numérique courant n’a ni point ni exposant

use super::evaluer;
use super::touche::{est_operateur, Touche};

/// Valeur initiale (et valeur après AC).
pub const TAMPON_INITIAL: &str = "0";

pub fn appliquer(tampon: &str, touche: Touche) -> String {
    log::trace!("touche {:?} sur {tampon:?}", touche.libelle());

    let dernier = tampon.chars().last();

    match touche {
        Touche::Effacer => return TAMPON_INITIAL.to_string(),

        Touche::Retour => {
            let mut s = tampon.to_string();
            s.pop();
            if s.is_empty() {
                return TAMPON_INITIAL.to_string();
            }
            return s;
        }

        Touche::Operateur(op) if dernier.is_some_and(est_operateur) => {
            if tampon == "-" {
                return tampon.to_string();
            }
            let mut s = tampon.to_string();
            s.pop();
            s.push(op.glyphe());
            return s;
        }

        Touche::Signe => {
            return match tampon.strip_prefix('-') {
                Some(reste) if !reste.is_empty() => reste.to_string(),
                Some(_) => TAMPON_INITIAL.to_string(),
                None => format!("-{tampon}"),
            };
        }

        Touche::Egal => {
            return match evaluer(tampon) {
                Ok(resultat) => resultat,
                Err(e) => {
                    log::debug!("évaluation ignorée pour {tampon:?}: {e}");
                    tampon.to_string()
                }
            };
        }

        _ => {}
    }

    let mut s = if tampon == TAMPON_INITIAL && !touche.est_operateur() {
        String::new()
    } else {
        tampon.to_string()
    };

    match touche {
        Touche::Chiffre(_) => s.push_str(touche.libelle()),
        Touche::Operateur(op) => {
            if !s.chars().last().is_some_and(est_operateur) {
                s.push(op.glyphe());
            }
        }
        Touche::Point => {
            if !segment_courant(&s).contains(['.', 'e', 'E']) {
                s.push('.');
            }
        }
        _ => {}
    }

    s
}

/// Texte après le dernier opérateur (le nombre en cours de saisie).
/// Le signe d’un exposant ("1.5e-7") fait partie du nombre.
pub fn segment_courant(tampon: &str) -> &str {
    let mut precedent: Option<char> = None;
    let mut debut = 0;
    for (i, c) in tampon.char_indices() {
        let signe_exposant = matches!(c, '-' | '+') && matches!(precedent, Some('e' | 'E'));
        if est_operateur(c) && !signe_exposant {
            debut = i + c.len_utf8();
        }
        precedent = Some(c);
    }
    &tampon[debut..]
}
