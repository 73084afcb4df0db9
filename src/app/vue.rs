// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Affichage : une ligne alignée à droite, police réduite au-delà de 20 caractères,
//   puis ajustée à la largeur (jamais sous 50 %).
// - Pavé : 5 rangées × 4 boutons ronds, opérateurs et "=" en orange.

use eframe::egui;

use super::etat::{echelle_ajustee, AppCalc, TAILLE_NOMINALE};
use crate::noyau::{Operateur, Touche};

const TAILLE_BOUTON: f32 = 80.0;
const TAILLE_LIBELLE: f32 = 32.0;
const ESPACEMENT: f32 = 10.0;
const MARGE_AFFICHAGE: f32 = 12.0;

const ORANGE: egui::Color32 = egui::Color32::from_rgb(255, 149, 0);
const GRIS: egui::Color32 = egui::Color32::from_rgb(80, 80, 80);

const PAVE: [[Touche; 4]; 5] = [
    [
        Touche::Retour,
        Touche::Effacer,
        Touche::Operateur(Operateur::Modulo),
        Touche::Operateur(Operateur::Divise),
    ],
    [
        Touche::Chiffre(7),
        Touche::Chiffre(8),
        Touche::Chiffre(9),
        Touche::Operateur(Operateur::Fois),
    ],
    [
        Touche::Chiffre(4),
        Touche::Chiffre(5),
        Touche::Chiffre(6),
        Touche::Operateur(Operateur::Moins),
    ],
    [
        Touche::Chiffre(1),
        Touche::Chiffre(2),
        Touche::Chiffre(3),
        Touche::Operateur(Operateur::Plus),
    ],
    [
        Touche::Signe,
        Touche::Chiffre(0),
        Touche::Point,
        Touche::Egal,
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACEMENT, ESPACEMENT);

        // Pavé collé en bas : on pousse avec l’espace restant
        let rangees = PAVE.len() as f32;
        let hauteur_pave = rangees * TAILLE_BOUTON + (rangees - 1.0) * ESPACEMENT;
        let hauteur_affichage = TAILLE_NOMINALE * 1.4;
        let vide = ui.available_height() - hauteur_pave - hauteur_affichage - MARGE_AFFICHAGE;
        if vide > 0.0 {
            ui.add_space(vide);
        }

        self.ui_affichage(ui);
        ui.add_space(MARGE_AFFICHAGE);
        self.ui_pave(ui);
    }

    fn ui_affichage(&self, ui: &mut egui::Ui) {
        let couleur = ui.visuals().strong_text_color();
        let largeur_dispo = ui.available_width() - 2.0 * MARGE_AFFICHAGE;

        // mesure à la taille choisie, puis shrink-to-fit borné
        let taille = self.taille_police();
        let mesure = ui.painter().layout_no_wrap(
            self.tampon.clone(),
            egui::FontId::proportional(taille),
            couleur,
        );
        let taille = taille * echelle_ajustee(mesure.size().x, largeur_dispo);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(MARGE_AFFICHAGE);
            ui.add(
                egui::Label::new(egui::RichText::new(&self.tampon).size(taille).color(couleur))
                    .extend(),
            );
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([ESPACEMENT, ESPACEMENT])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for touche in rangee {
                        self.bouton(ui, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche) {
        let libelle = egui::RichText::new(touche.libelle())
            .size(TAILLE_LIBELLE)
            .color(egui::Color32::WHITE);
        let bouton = egui::Button::new(libelle)
            .fill(couleur_bouton(touche))
            .corner_radius(TAILLE_BOUTON / 2.0);

        if ui.add_sized([TAILLE_BOUTON, TAILLE_BOUTON], bouton).clicked() {
            self.appuyer(touche);
        }
    }
}

/// Opérateurs arithmétiques et "=" en orange ; "%" reste gris comme les autres touches.
fn couleur_bouton(touche: Touche) -> egui::Color32 {
    match touche {
        Touche::Operateur(
            Operateur::Plus | Operateur::Moins | Operateur::Fois | Operateur::Divise,
        )
        | Touche::Egal => ORANGE,
        _ => GRIS,
    }
}
