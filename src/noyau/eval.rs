//! Noyau — évaluation du tampon
//!
//! normalise (x ÷ => * /) -> modulo `a%b` ? -> pourcentage final `a%` ? -> infixe (jetons -> RPN)
//!        -> format général
//!
//! Toute valeur non finie (9÷0, 5%0) est un échec : l’appelant garde son tampon.

use super::erreur::ErreurEval;
use super::format::format_general;
use super::jetons::tokenize;
use super::rpn::{eval_rpn, to_rpn};

/// API publique : évalue un tampon terminé et retourne le texte à afficher.
pub fn evaluer(expression: &str) -> Result<String, ErreurEval> {
    let mut s = normaliser(expression);
    if s.trim().is_empty() {
        return Err(ErreurEval::Vide);
    }

    // 1) Modulo : "a%b", deux opérandes numériques simples
    if let Some((gauche, droite)) = s.split_once('%') {
        if let (Some(a), Some(b)) = (lire_nombre(gauche), lire_nombre(droite)) {
            // reste tronqué : a - trunc(a/b)*b
            return format_general(a % b);
        }
    }

    // 2) Pourcentage final : "a%" => a/100
    //    Si le reste n’est pas un nombre simple ("5+50%"), on évalue le reste tel quel.
    if s.ends_with('%') {
        s.pop();
        if let Some(n) = lire_nombre(&s) {
            return format_general(n / 100.0);
        }
    }

    // 3) Infixe général
    let jetons = tokenize(&s)?;
    let rpn = to_rpn(&jetons)?;
    let v = eval_rpn(&rpn)?;
    format_general(v)
}

/// Glyphes d’affichage -> symboles arithmétiques.
fn normaliser(expression: &str) -> String {
    expression
        .chars()
        .map(|c| match c {
            'x' | 'X' | '×' => '*',
            '÷' => '/',
            _ => c,
        })
        .collect()
}

/// Nombre “simple” : signe optionnel, chiffres, un point au plus, exposant éventuel.
/// Refuse inf / NaN et tout texte contenant un opérateur.
fn lire_nombre(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.chars().any(|c| c.is_alphabetic() && c != 'e' && c != 'E') {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
