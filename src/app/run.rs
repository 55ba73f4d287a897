//! Top-level entry point for running the dot plot as a native window.

use eframe::egui;

use crate::config::DotPlotConfig;
use crate::error::{DotPlotError, Result};

use super::DotPlotApp;

const ICON_SVG: &[u8] = include_bytes!("../../icon.svg");
const ICON_SIZE: u32 = 128;

/// Launch the dot plot in a native window.
///
/// The drawing surface is derived from `cfg.viewport` once, before the window
/// opens; the window starts at that size. The call blocks until the window is
/// closed.
pub fn run_dotplot(mut cfg: DotPlotConfig) -> Result<()> {
    let app = DotPlotApp::new(&cfg)?;

    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    if opts.viewport.icon.is_none() {
        if let Some(icon) = app_icon(ICON_SIZE) {
            opts.viewport = opts.viewport.clone().with_icon(icon);
        }
    }

    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(cfg.viewport[0], cfg.viewport[1]));
    }

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| DotPlotError::Window(e.to_string()))
}

/// Rasterize the bundled `icon.svg` into a square `size × size` icon.
///
/// Returns `None` if the SVG cannot be parsed or `size` is zero.
fn app_icon(size: u32) -> Option<egui::IconData> {
    let tree = usvg::Tree::from_data(ICON_SVG, &usvg::Options::default()).ok()?;
    let svg = tree.size();
    let scale = size as f32 / svg.width().max(svg.height());
    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some(egui::IconData {
        rgba: pixmap.take(),
        width: size,
        height: size,
    })
}
