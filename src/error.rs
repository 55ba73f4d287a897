//! Error types for configuration loading and surface setup.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while preparing a plot. Interaction itself is infallible.
#[derive(Debug, Error)]
pub enum DotPlotError {
    #[error("failed to read config file {path:?}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML in {path:?}")]
    ConfigYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid JSON in {path:?}")]
    ConfigJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported config extension {path:?} (expected .yaml, .yml or .json)")]
    UnsupportedConfigFormat { path: PathBuf },
    #[error("drawing surface is degenerate: {width}x{height} px after margins")]
    DegenerateSurface { width: f64, height: f64 },
    #[error("window failed: {0}")]
    Window(String),
}

pub type Result<T> = std::result::Result<T, DotPlotError>;
