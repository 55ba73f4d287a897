//! Application wiring for the dot plot window.
//!
//! | Sub-module      | Responsibility |
//! | --------------- | -------------- |
//! | [`dotplot_app`] | [`DotPlotApp`] (eframe) wrapper: toolbar, plot and table panels |
//! | [`run`]         | Native [`run_dotplot()`] entry point and icon loading |
//! | `web`           | wasm32 entry point rendering into a host page canvas |

mod dotplot_app;
#[cfg(not(target_arch = "wasm32"))]
mod run;
#[cfg(target_arch = "wasm32")]
mod web;

pub use dotplot_app::DotPlotApp;
#[cfg(not(target_arch = "wasm32"))]
pub use run::run_dotplot;
#[cfg(target_arch = "wasm32")]
pub use web::start;
