use anyhow::{anyhow, Result};
use eframe::egui;

use crate::render::chart::Chart;
use crate::render::RenderConfig;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PerfPlotApp {
    pub state: AppState,
}

impl PerfPlotApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for PerfPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: series details ----
        egui::SidePanel::left("series_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::performance_plot(ui, &self.state);
        });
    }
}

/// Open the chart in a native window and block until it is closed.
pub fn run_window(chart: Chart, config: &RenderConfig) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    let state = AppState::new(chart, config.clone());
    eframe::run_native(
        "perf-plot",
        options,
        Box::new(move |_cc| Ok(Box::new(PerfPlotApp::new(state)))),
    )
    .map_err(|e| anyhow!("interactive window failed: {e}"))
}
