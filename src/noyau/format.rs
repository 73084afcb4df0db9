// src/noyau/format.rs
//
// Affichage “général” d’un f64 :
// - arrondi à 15 chiffres significatifs (0.1+0.2 => 0.3), sauf entiers exacts (|x| <= 2^53)
// - zéros finaux supprimés (2.50 => 2.5, 8.0 => 8)
// - notation décimale pour 1e-6 <= |x| < 1e16, scientifique sinon (1.5e-7, 1e20)

use super::erreur::ErreurEval;

/// Chiffres significatifs conservés à l’affichage.
const CHIFFRES_SIGNIFICATIFS: usize = 15;

const BORNE_BASSE: f64 = 1e-6;
const BORNE_HAUTE: f64 = 1e16;

/// Plus grand entier dont tous les voisins sont représentables exactement (2^53).
const ENTIER_EXACT_MAX: f64 = 9_007_199_254_740_992.0;

/// Formate un résultat. Refuse NaN / ±∞ (le tampon restera inchangé).
pub fn format_general(x: f64) -> Result<String, ErreurEval> {
    if !x.is_finite() {
        return Err(ErreurEval::NonFini);
    }

    let x = arrondi_significatif(x);

    // -0 => 0
    if x == 0.0 {
        return Ok("0".to_string());
    }

    let a = x.abs();
    if (BORNE_BASSE..BORNE_HAUTE).contains(&a) {
        Ok(format!("{x}"))
    } else {
        Ok(format!("{x:e}"))
    }
}

/// Arrondi à CHIFFRES_SIGNIFICATIFS via la notation scientifique de std.
/// Un entier exact est gardé tel quel ; si l’arrondi déborde (près de f64::MAX), on garde x.
fn arrondi_significatif(x: f64) -> f64 {
    if x.fract() == 0.0 && x.abs() <= ENTIER_EXACT_MAX {
        return x;
    }
    let txt = format!("{:.*e}", CHIFFRES_SIGNIFICATIFS - 1, x);
    txt.parse::<f64>().ok().filter(|r| r.is_finite()).unwrap_or(x)
}
