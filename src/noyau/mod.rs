//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - touche.rs   : touches du pavé + ensemble des opérateurs
//! - tampon.rs   : machine d’état (tampon, touche) -> tampon
//! - eval.rs     : modulo / pourcentage / infixe
//! - jetons.rs   : tokenisation infixe
//! - rpn.rs      : shunting-yard + réduction f64
//! - format.rs   : affichage “général” des résultats
//! - erreur.rs   : échecs d’évaluation (silencieux côté UI)

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod tampon;
pub mod touche;

#[cfg(test)]
mod tests_scenarios;


// API publique minimale
pub use eval::evaluer;
pub use tampon::{appliquer, TAMPON_INITIAL};
pub use touche::{Operateur, Touche};
