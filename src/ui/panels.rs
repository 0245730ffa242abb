use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::to_egui;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – series details
// ---------------------------------------------------------------------------

/// Render the left panel: one collapsible entry per series, in legend order.
pub fn side_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Series");
    ui.separator();

    let chart = &state.chart;
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (i, (trace, color)) in chart.traces().iter().zip(chart.colors()).enumerate() {
                let header = RichText::new(format!("■ {}", trace.label))
                    .color(to_egui(color))
                    .strong();

                egui::CollapsingHeader::new(header)
                    .id_salt(i)
                    .default_open(false)
                    .show(ui, |ui: &mut Ui| {
                        ui.label(format!("{} trials", trace.trials));
                        ui.label(format!("{} iterations", trace.episodes.len()));
                        ui.label(RichText::new(trace.source.display().to_string()).weak());

                        if trace.skipped() > 0 {
                            ui.label(
                                RichText::new(format!(
                                    "{} points with episodes ≤ 0 not shown",
                                    trace.skipped()
                                ))
                                .color(Color32::YELLOW),
                            );
                        }

                        if !trace.comments.is_empty() {
                            ui.separator();
                            for c in &trace.comments {
                                ui.label(RichText::new(c).monospace());
                            }
                        }
                    });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Save PNG…").clicked() {
                save_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!("{} series", state.chart.traces().len()));

        if let Some(msg) = &state.status_message {
            ui.separator();
            let text = RichText::new(msg);
            if state.status_is_error() {
                ui.label(text.color(Color32::RED));
            } else {
                ui.label(text);
            }
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn save_file_dialog(state: &mut AppState) {
    let default_name = state.config.output_file.display().to_string();
    let file = rfd::FileDialog::new()
        .set_title("Save chart")
        .add_filter("PNG image", &["png"])
        .set_file_name(default_name)
        .save_file();

    if let Some(path) = file {
        log::info!("Saving chart to {}", path.display());
        state.save_png(&path);
    }
}
