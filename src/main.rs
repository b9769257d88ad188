// src/main.rs
//
// Calculatrice RPN : fenêtre native (eframe::run_native) ou canvas web (eframe::WebRunner).
// Le noyau (noyau/) ne dépend pas de l’UI ; l’UI (app/) n’appelle que noyau::{evaluate, etapes}.
//
// Logs natifs : RUST_LOG=calculatrice_rpn=debug cargo run

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

const TITRE_APP: &str = "Calculatrice RPN";
const TAILLE_FENETRE: [f32; 2] = [420.0, 620.0];
const TAILLE_MIN_FENETRE: [f32; 2] = [360.0, 520.0];

#[cfg(not(target_arch = "wasm32"))]
fn init_logs() {
    let filtre = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());
    tracing_subscriber::fmt().with_env_filter(filtre).init();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    init_logs();

    let viewport = egui::ViewportBuilder::default()
        .with_title(TITRE_APP)
        .with_inner_size(TAILLE_FENETRE)
        .with_min_inner_size(TAILLE_MIN_FENETRE);
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    tracing::info!(titre = TITRE_APP, "ouverture de la fenêtre");
    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
}

// wasm32 : rien à faire ici, `web::start` est appelé au chargement du module.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::HtmlCanvasElement;

    /// <canvas id="calculatrice_rpn"></canvas> dans index.html
    const CANVAS_ID: &str = "calculatrice_rpn";

    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("pas de document (hors navigateur ?)"))?;
        document.set_title(TITRE_APP);

        let canvas = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str("canvas calculatrice_rpn absent"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("calculatrice_rpn n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }
}
