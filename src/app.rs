// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier (natif + web) : mêmes touches que le pavé.
// - texte tapé : 0-9 . , + - * x / % =
// - Enter = "=", Backspace = "⏎", Escape/Delete = "AC"

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Touche;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let touches = ctx.input(|i| touches_clavier(&i.events));
        self.appuyer_tout(touches);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}

/// Événements clavier de la frame -> touches, dans l’ordre d’arrivée.
fn touches_clavier(events: &[egui::Event]) -> Vec<Touche> {
    let mut out = Vec::new();
    for ev in events {
        match ev {
            egui::Event::Text(texte) => {
                out.extend(texte.chars().filter_map(Touche::depuis_clavier));
            }
            egui::Event::Key {
                key, pressed: true, ..
            } => out.extend(touche_pour_cle(*key)),
            _ => {}
        }
    }
    out
}

fn touche_pour_cle(cle: egui::Key) -> Option<Touche> {
    match cle {
        egui::Key::Enter => Some(Touche::Egal),
        egui::Key::Backspace => Some(Touche::Retour),
        egui::Key::Escape | egui::Key::Delete => Some(Touche::Effacer),
        _ => None,
    }
}
