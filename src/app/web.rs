//! WebAssembly entry point: runs the dot plot inside a host page canvas.

use eframe::egui;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::DotPlotConfig;

use super::DotPlotApp;

/// Start the dot plot on the `<canvas>` element with id `canvas_id`.
///
/// The drawing surface is derived from the browser window size at call time
/// and is not recomputed on resize.
#[wasm_bindgen]
pub async fn start(canvas_id: String) -> Result<(), JsValue> {
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .get_element_by_id(&canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id {canvas_id:?}")))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("{canvas_id:?} is not a canvas")))?;

    let inner_w = window.inner_width()?.as_f64().unwrap_or(1000.0);
    let inner_h = window.inner_height()?.as_f64().unwrap_or(800.0);
    let cfg = DotPlotConfig {
        viewport: [inner_w as f32, inner_h as f32],
        ..Default::default()
    };
    let app = DotPlotApp::new(&cfg).map_err(|e| JsValue::from_str(&e.to_string()))?;

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(|cc| {
                let mut fonts = egui::FontDefinitions::default();
                egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
                cc.egui_ctx.set_fonts(fonts);
                Ok(Box::new(app))
            }),
        )
        .await
}
