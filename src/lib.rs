//! DotPlot crate root: re-exports and module wiring.
//!
//! An interactive scatter plot built on egui/eframe: click the background to
//! add a point, click a point to remove it, drag a point to move it. A table
//! under the plot shows the normalized coordinates of every point live.
//!
//! - `mapper`: data space ↔ drawing-surface pixel transforms
//! - `data`: the point store and marker styling
//! - `interaction`: pointer gesture state machine
//! - `render`: marker/table reconciliation against the store
//! - `plot`: the owned plot state tying the above together
//! - `panels` / `app`: egui drawing, native and web entry points

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod interaction;
pub mod mapper;
pub mod panels;
pub mod plot;
pub mod render;

pub use app::DotPlotApp;
#[cfg(not(target_arch = "wasm32"))]
pub use app::run_dotplot;
pub use config::{ClampPolicy, DotPlotConfig, FeatureFlags, Margins};
pub use data::points::{Point, PointStore};
pub use error::DotPlotError;
pub use interaction::{InteractionHandler, PointerEvent, Refresh};
pub use mapper::CoordinateMapper;
pub use plot::DotPlot;
pub use render::{Scene, TableRow};
