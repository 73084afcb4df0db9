//! Tests de scénarios : suites de boutons depuis l’état initial "0".
//!
//! Chaque scénario rejoue les libellés exacts du pavé (19 boutons) et vérifie le tampon final.
//! Les choix faits sur les cas limites sont épinglés ici :
//! - division par zéro / modulo zéro : tampon inchangé (pas de "inf")
//! - point décimal : un seul par segment numérique (pas de "1.23.")
//! - division toujours flottante (7÷2 = 3.5)

use super::{appliquer, Operateur, Touche, TAMPON_INITIAL};

fn saisir(libelles: &[&str]) -> String {
    let mut t = TAMPON_INITIAL.to_string();
    for l in libelles {
        let touche = Touche::depuis_libelle(l).unwrap_or_else(|| panic!("libellé inconnu {l:?}"));
        t = appliquer(&t, touche);
    }
    t
}

fn assert_saisie(libelles: &[&str], attendu: &str) {
    assert_eq!(saisir(libelles), attendu, "saisie={libelles:?}");
}

/* ------------------------ Scénarios de référence ------------------------ */

#[test]
fn addition() {
    assert_saisie(&["5", "+", "3", "="], "8");
}

#[test]
fn modulo() {
    assert_saisie(&["5", "%", "2", "="], "1");
}

#[test]
fn pourcentage_final() {
    assert_saisie(&["5", "0", "%", "="], "0.5");
}

#[test]
fn division_par_zero_tampon_inchange() {
    assert_saisie(&["9", "÷", "0", "="], "9÷0");
    // et on peut corriger ensuite
    assert_saisie(&["9", "÷", "0", "⏎", "3", "="], "3");
}

#[test]
fn modulo_par_zero_tampon_inchange() {
    assert_saisie(&["5", "%", "0", "="], "5%0");
}

#[test]
fn ac_en_cours_d_expression() {
    assert_saisie(&["1", "2", "+", "3", "AC"], "0");
    assert_saisie(&["1", "2", "+", "3", "=", "AC"], "0");
}

/* ------------------------ Propriétés ------------------------ */

#[test]
fn chiffres_concatenes() {
    let suites: [&[&str]; 4] = [
        &["1", "2", "3"],
        &["9", "0", "0", "1"],
        &["0", "0", "4", "2"],
        &["7"],
    ];
    for suite in suites {
        let attendu: String = suite.concat().trim_start_matches('0').to_string();
        assert_saisie(suite, &attendu);
    }
}

#[test]
fn retour_sur_zero_idempotent() {
    let mut t = TAMPON_INITIAL.to_string();
    for _ in 0..5 {
        t = appliquer(&t, Touche::Retour);
        assert_eq!(t, "0");
    }
}

#[test]
fn deux_operateurs_gardent_le_second() {
    for a in Operateur::TOUS {
        for b in Operateur::TOUS {
            let t = saisir(&["4", "2"]);
            let t = appliquer(&t, Touche::Operateur(a));
            let t = appliquer(&t, Touche::Operateur(b));
            assert_eq!(t, format!("42{}", b.glyphe()), "a={a:?} b={b:?}");
        }
    }
}

#[test]
fn signe_involutif() {
    for tampon in ["0", "5", "-5", "12+3", "3.5x2", "-0", "1e20", "9÷0"] {
        let une = appliquer(tampon, Touche::Signe);
        let deux = appliquer(&une, Touche::Signe);
        assert_eq!(deux, tampon, "tampon={tampon:?}");
    }
}

/* ------------------------ Enchaînements ------------------------ */

#[test]
fn precedence_sur_le_pave() {
    assert_saisie(&["2", "+", "3", "x", "4", "="], "14");
    assert_saisie(&["8", "-", "3", "-", "2", "="], "3");
}

#[test]
fn division_flottante() {
    assert_saisie(&["7", "÷", "2", "="], "3.5");
    assert_saisie(&["1", "÷", "3", "="], "0.333333333333333");
}

#[test]
fn resultat_reutilisable() {
    assert_saisie(&["5", "+", "3", "=", "x", "2", "="], "16");
    assert_saisie(&["5", "+/-", "+", "2", "="], "-3");
}

#[test]
fn decimales() {
    assert_saisie(&["0", ".", "1", "+", ".", "2", "="], "0.3");
    assert_saisie(&["2", ".", "5", "x", "4", "="], "10");
}

#[test]
fn point_decimal_borne_au_segment() {
    assert_saisie(&["1", ".", "2", "3", ".", "4"], "1.234");
    assert_saisie(&["1", ".", "2", "+", "3", ".", "4", "="], "4.6");
}

#[test]
fn pourcentage_apres_expression() {
    assert_saisie(&["5", "+", "5", "0", "%", "="], "55");
}

#[test]
fn expression_incomplete_ignoree() {
    assert_saisie(&["5", "+", "="], "5+");
    assert_saisie(&["5", "x", "."], "5x.");
    assert_saisie(&["5", "x", ".", "="], "5x.");
}

/// Libellés d’un nombre tapé chiffre par chiffre.
fn libelles_nombre(nombre: &str) -> Vec<String> {
    nombre.chars().map(String::from).collect()
}

#[test]
fn grand_resultat_jamais_inf() {
    let mut saisie = libelles_nombre("1.7976931348623157");
    saisie.extend(["x".to_string(), "1".to_string()]);
    saisie.extend(std::iter::repeat_n("0".to_string(), 308));
    saisie.push("=".to_string());
    let libelles: Vec<&str> = saisie.iter().map(String::as_str).collect();

    let t = saisir(&libelles);
    assert!(!t.contains("inf"), "tampon={t:?}");
    assert!(t.starts_with("1.79769313486231"), "tampon={t:?}");
    assert!(t.ends_with("e308"), "tampon={t:?}");
}

#[test]
fn entier_seize_chiffres_conserve() {
    let saisie = libelles_nombre("1234567890123456");
    let mut libelles: Vec<&str> = saisie.iter().map(String::as_str).collect();
    libelles.push("=");
    assert_saisie(&libelles, "1234567890123456");
}

#[test]
fn retour_sur_nombre_negatif() {
    assert_saisie(&["5", "+/-", "⏎", "3"], "-3");
    assert_saisie(&["5", "+/-", "⏎", "⏎"], "0");
}
