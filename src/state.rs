use std::path::Path;

use crate::render::chart::{Chart, LegendCorner};
use crate::render::{png, RenderConfig};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The viewer state, independent of rendering.
pub struct AppState {
    /// The finished chart; read-only once the window is open.
    pub chart: Chart,

    pub config: RenderConfig,

    /// Legend corner, computed once from the data.
    pub legend_corner: LegendCorner,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(chart: Chart, config: RenderConfig) -> Self {
        let legend_corner = chart.best_legend_corner();
        Self {
            chart,
            config,
            legend_corner,
            status_message: None,
        }
    }

    /// Write the chart the same way a headless run would.
    pub fn save_png(&mut self, path: &Path) {
        match png::save_png(&self.chart, &self.config, path) {
            Ok(()) => {
                self.status_message = Some(format!("Saved {}", path.display()));
            }
            Err(e) => {
                log::error!("Failed to save chart: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    pub fn status_is_error(&self) -> bool {
        self.status_message
            .as_deref()
            .is_some_and(|m| m.starts_with("Error"))
    }
}
