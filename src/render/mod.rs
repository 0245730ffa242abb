/// Chart model and its two outputs.
///
/// ```text
///   Chart ──┬── headless ──► png::save_png  → performance_plot.png
///           └── display  ──► app::run_window (egui)
/// ```
pub mod chart;
pub mod png;

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Result;
use log::info;

use crate::app;
use chart::Chart;

// ---------------------------------------------------------------------------
// Rendering constants
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Where the headless run writes its image (relative to the cwd).
    pub output_file: PathBuf,
    pub dpi: u32,
    /// Figure size in inches (width, height).
    pub figure_inches: (f64, f64),
    /// Margin kept around the drawn content when cropping, in inches.
    pub pad_inches: f64,
    pub window_size: [f32; 2],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_file: PathBuf::from("performance_plot.png"),
            dpi: 150,
            figure_inches: (6.4, 4.8),
            pad_inches: 0.1,
            window_size: [960.0, 720.0],
        }
    }
}

impl RenderConfig {
    /// Canvas size in pixels before cropping.
    pub fn canvas_size(&self) -> (u32, u32) {
        let dpi = self.dpi as f64;
        (
            (self.figure_inches.0 * dpi).round() as u32,
            (self.figure_inches.1 * dpi).round() as u32,
        )
    }

    pub fn pad_pixels(&self) -> u32 {
        (self.pad_inches * self.dpi as f64).round() as u32
    }
}

// ---------------------------------------------------------------------------
// Display detection
// ---------------------------------------------------------------------------

/// Answers "can we open a window?" once, at startup.
pub trait DisplayProbe {
    fn has_display(&self) -> bool;
}

/// Looks at the process environment: X11/Wayland sessions on Unix, always
/// available on macOS and Windows.
pub struct EnvDisplayProbe;

impl DisplayProbe for EnvDisplayProbe {
    fn has_display(&self) -> bool {
        if cfg!(any(target_os = "macos", target_os = "windows")) {
            return true;
        }
        display_vars_set(|var| std::env::var_os(var))
    }
}

/// A session variable being present is enough, even when it is empty.
fn display_vars_set(lookup: impl Fn(&str) -> Option<OsString>) -> bool {
    ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|var| lookup(var).is_some())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    Window,
    File(PathBuf),
}

pub fn choose_output(probe: &dyn DisplayProbe, config: &RenderConfig) -> OutputMode {
    if probe.has_display() {
        OutputMode::Window
    } else {
        OutputMode::File(config.output_file.clone())
    }
}

/// Show or save the finished chart. Blocks until the window is closed in
/// window mode.
pub fn finish(chart: Chart, mode: OutputMode, config: &RenderConfig) -> Result<()> {
    match mode {
        OutputMode::File(path) => {
            png::save_png(&chart, config, &path)?;
            println!("Plot saved to {}", path.display());
            Ok(())
        }
        OutputMode::Window => {
            info!("Opening window with {} series", chart.traces().len());
            app::run_window(chart, config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProbe(bool);

    impl DisplayProbe for FixedProbe {
        fn has_display(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn headless_writes_the_fixed_file() {
        let config = RenderConfig::default();
        assert_eq!(
            choose_output(&FixedProbe(false), &config),
            OutputMode::File(PathBuf::from("performance_plot.png"))
        );
    }

    #[test]
    fn display_opens_a_window() {
        assert_eq!(
            choose_output(&FixedProbe(true), &RenderConfig::default()),
            OutputMode::Window
        );
    }

    #[test]
    fn empty_display_variable_still_counts() {
        assert!(display_vars_set(|var| (var == "DISPLAY").then(OsString::new)));
        assert!(display_vars_set(|var| {
            (var == "WAYLAND_DISPLAY").then(|| OsString::from("wayland-0"))
        }));
        assert!(!display_vars_set(|_| None));
    }

    #[test]
    fn canvas_matches_dpi() {
        let config = RenderConfig::default();
        assert_eq!(config.canvas_size(), (960, 720));
        assert_eq!(config.pad_pixels(), 15);
    }
}
