//! Standalone application wrapper for the dot plot.
//!
//! [`DotPlotApp`] owns the [`DotPlot`] state and the panels that draw it, and
//! implements [`eframe::App`] so it can run as a native window or in a web
//! canvas.

use eframe::egui;

use crate::config::{DotPlotConfig, FeatureFlags};
use crate::error::Result;
use crate::panels::{Panel, PlotPanel, TablePanel};
use crate::plot::DotPlot;

pub struct DotPlotApp {
    pub plot: DotPlot,
    plot_panel: PlotPanel,
    table_panel: TablePanel,
    features: FeatureFlags,
}

impl DotPlotApp {
    pub fn new(cfg: &DotPlotConfig) -> Result<Self> {
        Ok(Self::with_plot(cfg, DotPlot::new(cfg)?))
    }

    /// Wrap an already built plot, e.g. one with a custom mapper.
    pub fn with_plot(cfg: &DotPlotConfig, plot: DotPlot) -> Self {
        Self {
            plot,
            plot_panel: PlotPanel::new(cfg),
            table_panel: TablePanel::new(cfg.table_precision),
            features: cfg.features.clone(),
        }
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui
                .button(format!("{} Reset", egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE))
                .on_hover_text("Replace all points with a fresh random set")
                .clicked()
            {
                self.plot.reset();
            }
            if ui
                .button(format!("{} Clear", egui_phosphor::regular::TRASH))
                .on_hover_text("Remove every point")
                .clicked()
            {
                self.plot.clear();
            }
            ui.separator();
            ui.label(format!("{} points", self.plot.store().len()));
            ui.weak("click background: add · click dot: remove · drag dot: move");
        });
    }
}

impl eframe::App for DotPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.features.toolbar {
            egui::TopBottomPanel::top("dotplot_toolbar").show(ctx, |ui| {
                self.toolbar(ui);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.plot_panel.show(ui, &mut self.plot);
            if self.features.table {
                ui.separator();
                ui.label(self.table_panel.title_and_icon());
                self.table_panel.show(ui, &mut self.plot);
            }
        });
    }
}
