//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder l’unique tampon d’affichage et y appliquer les touches une à une.
//! La logique de transition vit dans le noyau (`noyau::appliquer`, fonction pure).
//!
//! Contrats :
//! - Une touche est traitée entièrement avant la suivante.
//! - Aucun message d’erreur : une évaluation ratée laisse le tampon tel quel.

use crate::noyau::{appliquer, Touche, TAMPON_INITIAL};

/// Taille nominale de l’affichage (pt).
pub const TAILLE_NOMINALE: f32 = 70.0;

/// Taille réduite quand le tampon dépasse SEUIL_LONGUEUR caractères.
pub const TAILLE_REDUITE: f32 = 50.0;

pub const SEUIL_LONGUEUR: usize = 20;

/// Réduction “shrink-to-fit” maximale : jamais sous 50 % de la taille choisie.
pub const ECHELLE_MIN: f32 = 0.5;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- tampon d’affichage (jamais vide) ---
    pub tampon: String,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            tampon: TAMPON_INITIAL.to_string(),
        }
    }
}

impl AppCalc {
    /// Applique une touche (bouton ou clavier) au tampon.
    pub fn appuyer(&mut self, touche: Touche) {
        self.tampon = appliquer(&self.tampon, touche);
    }

    /// Applique une suite de touches, dans l’ordre.
    pub fn appuyer_tout(&mut self, touches: impl IntoIterator<Item = Touche>) {
        for t in touches {
            self.appuyer(t);
        }
    }

    /// Taille de police selon la longueur du tampon (en caractères, pas en octets).
    pub fn taille_police(&self) -> f32 {
        if self.tampon.chars().count() > SEUIL_LONGUEUR {
            TAILLE_REDUITE
        } else {
            TAILLE_NOMINALE
        }
    }
}

/// Facteur d’échelle pour faire tenir un texte de `largeur_texte` dans `largeur_dispo`,
/// borné à ECHELLE_MIN.
pub fn echelle_ajustee(largeur_texte: f32, largeur_dispo: f32) -> f32 {
    if largeur_texte <= largeur_dispo || largeur_texte <= 0.0 {
        return 1.0;
    }
    (largeur_dispo / largeur_texte).clamp(ECHELLE_MIN, 1.0)
}
