//! `dotplot` binary: open the interactive dot plot in a native window.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::Parser;

    use dotplot::{ClampPolicy, DotPlotConfig};

    #[derive(Parser, Debug)]
    #[command(version, about = "Draggable, clickable dots with a live coordinate table")]
    struct Args {
        /// YAML or JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Number of points created at startup
        #[arg(short = 'n', long)]
        points: Option<usize>,
        /// Seed for the initial random Y values
        #[arg(long)]
        seed: Option<u64>,
        /// Keep dragged points on the drawing surface
        #[arg(long)]
        clamp: bool,
        /// Viewport width in pixels
        #[arg(long)]
        width: Option<f32>,
        /// Viewport height in pixels
        #[arg(long)]
        height: Option<f32>,
        /// Decimal places shown in the table
        #[arg(long)]
        precision: Option<usize>,
    }

    impl Args {
        fn into_config(self) -> anyhow::Result<DotPlotConfig> {
            let mut cfg = match &self.config {
                Some(path) => DotPlotConfig::load(path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => DotPlotConfig::default(),
            };
            if let Some(n) = self.points {
                cfg.initial_points = n;
            }
            if self.seed.is_some() {
                cfg.seed = self.seed;
            }
            if self.clamp {
                cfg.clamp = ClampPolicy::Surface;
            }
            if let Some(w) = self.width {
                cfg.viewport[0] = w;
            }
            if let Some(h) = self.height {
                cfg.viewport[1] = h;
            }
            if self.precision.is_some() {
                cfg.table_precision = self.precision;
            }
            Ok(cfg)
        }
    }

    pub fn main() -> anyhow::Result<()> {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("info,wgpu_core=warn,wgpu_hal=warn"),
        )
        .init();

        let cfg = Args::parse().into_config()?;
        log::info!(
            "starting with {} points, viewport {}x{}",
            cfg.initial_points,
            cfg.viewport[0],
            cfg.viewport[1]
        );
        dotplot::run_dotplot(cfg).context("running dot plot window")
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::main()
}

// The web build is driven by `dotplot::app::start` from the host page.
#[cfg(target_arch = "wasm32")]
fn main() {}
