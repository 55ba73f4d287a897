//! Configuration for the dot plot UI.
//!
//! A [`DotPlotConfig`] can be built in code, loaded from a YAML or JSON file
//! with [`DotPlotConfig::load`], and is then handed to
//! [`run_dotplot`](crate::run_dotplot).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DotPlotError, Result};

// ─────────────────────────────────────────────────────────────────────────────
// Margins
// ─────────────────────────────────────────────────────────────────────────────

/// Fixed pixel margins around the drawing surface. The left and bottom margins
/// hold the axis tick labels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: 31.0,
            right: 31.0,
            top: 11.0,
            bottom: 31.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Drag policy
// ─────────────────────────────────────────────────────────────────────────────

/// What happens when a marker is dragged past the edge of the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClampPolicy {
    /// Follow the pointer anywhere; data coordinates may leave `[0,1]`.
    #[default]
    None,
    /// Keep the marker on the drawing surface.
    Surface,
}

// ─────────────────────────────────────────────────────────────────────────────
// Feature flags
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle individual UI elements on or off.
///
/// All features default to `true` (enabled).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// Show the toolbar with reset/clear buttons.
    pub toolbar: bool,
    /// Draw the bottom and left axes with tick labels.
    pub axes: bool,
    /// Show the live coordinate table below the plot.
    pub table: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            toolbar: true,
            axes: true,
            table: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DotPlotConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the dot plot.
///
/// | Field            | Purpose |
/// |------------------|---------|
/// | `viewport`       | Window size the drawing surface is derived from |
/// | `margins`        | Space around the drawing surface |
/// | `initial_points` | Points created at startup |
/// | `drag_threshold` | Pointer travel (px) before a press counts as a drag |
/// | `clamp`          | Drag clamping policy |
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DotPlotConfig {
    // ── Window / chrome ──────────────────────────────────────────────────────
    /// Native window title.
    pub title: String,
    /// Viewport size in logical pixels. Read once at startup.
    pub viewport: [f32; 2],
    /// Optional eframe native-window options.
    #[cfg(not(target_arch = "wasm32"))]
    #[serde(skip)]
    pub native_options: Option<eframe::NativeOptions>,

    // ── Geometry ─────────────────────────────────────────────────────────────
    pub margins: Margins,
    /// Marker radius in pixels.
    pub dot_radius: f32,
    /// Number of ticks on each axis.
    pub tick_count: usize,

    // ── Points ───────────────────────────────────────────────────────────────
    /// Number of points created at startup.
    pub initial_points: usize,
    /// Seed for the initial random Y values. `None` draws from entropy.
    pub seed: Option<u64>,

    // ── Interaction ──────────────────────────────────────────────────────────
    pub drag_threshold: f64,
    pub clamp: ClampPolicy,

    // ── Table ────────────────────────────────────────────────────────────────
    /// Decimal places shown in the table. `None` shows the full value.
    pub table_precision: Option<usize>,

    pub features: FeatureFlags,
}

impl Default for DotPlotConfig {
    fn default() -> Self {
        Self {
            title: "DotPlot".to_string(),
            viewport: [1000.0, 800.0],
            #[cfg(not(target_arch = "wasm32"))]
            native_options: None,

            margins: Margins::default(),
            dot_radius: 16.0,
            tick_count: 10,

            initial_points: 10,
            seed: None,

            drag_threshold: 0.0,
            clamp: ClampPolicy::None,

            table_precision: None,
            features: FeatureFlags::default(),
        }
    }
}

impl DotPlotConfig {
    /// Load a config from a `.yaml`/`.yml` or `.json` file. Missing fields take
    /// their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| DotPlotError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&text).map_err(|source| {
                DotPlotError::ConfigYaml {
                    path: path.to_path_buf(),
                    source,
                }
            }),
            Some("json") => Self::from_json_str(&text).map_err(|source| DotPlotError::ConfigJson {
                path: path.to_path_buf(),
                source,
            }),
            _ => Err(DotPlotError::UnsupportedConfigFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn from_yaml_str(text: &str) -> std::result::Result<Self, serde_yaml::Error> {
        let cfg: Self = serde_yaml::from_str(text)?;
        Ok(cfg.sanitized())
    }

    pub fn from_json_str(text: &str) -> std::result::Result<Self, serde_json::Error> {
        let cfg: Self = serde_json::from_str(text)?;
        Ok(cfg.sanitized())
    }

    pub fn to_yaml_string(&self) -> std::result::Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Replace out-of-range values with their defaults.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.dot_radius > 0.0) {
            log::warn!(
                "ignoring dot_radius {}, using {}",
                self.dot_radius,
                defaults.dot_radius
            );
            self.dot_radius = defaults.dot_radius;
        }
        if !(self.drag_threshold >= 0.0) {
            log::warn!(
                "ignoring drag_threshold {}, using {}",
                self.drag_threshold,
                defaults.drag_threshold
            );
            self.drag_threshold = defaults.drag_threshold;
        }
        self
    }
}
