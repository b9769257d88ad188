// src/app.rs
//
// Shell egui : état (etat.rs) + vue (vue.rs). Aucune logique de calcul ici.

pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Échap vide la ligne de saisie, comme "C" ; Enter est géré par le champ lui-même.
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.clear_entree();
        }

        egui::CentralPanel::default().show(ctx, |ui| self.ui(ui));
    }
}
