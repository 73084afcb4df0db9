// src/noyau/erreur.rs

use thiserror::Error;

/// Échecs d’évaluation. Jamais affichés : le tampon reste inchangé.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErreurEval {
    #[error("entrée vide")]
    Vide,
    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),
    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),
    #[error("expression invalide")]
    ExpressionInvalide,
    #[error("résultat non fini")]
    NonFini,
}
