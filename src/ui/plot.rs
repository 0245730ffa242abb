use eframe::egui::Ui;
use egui_plot::{Corner, GridInput, GridMark, Legend, Line, Plot, PlotPoints, Points};

use crate::color::to_egui;
use crate::render::chart::{log_grid_marks, LegendCorner};
use crate::state::AppState;

// Half width of an error-bar cap, in decades.
const CAP_HALF_WIDTH: f64 = 0.015;

// ---------------------------------------------------------------------------
// Performance plot (central panel)
// ---------------------------------------------------------------------------

/// Render the error-bar chart. egui_plot has no log axis, so x is plotted
/// as log10(episodes) and the axis, grid and tooltip translate back.
pub fn performance_plot(ui: &mut Ui, state: &AppState) {
    let chart = &state.chart;
    let x = chart.x_range();
    let y = chart.y_range();

    Plot::new("performance_plot")
        .legend(Legend::default().position(legend_corner(state.legend_corner)))
        .x_axis_label(chart.x_label.as_str())
        .y_axis_label(chart.y_label.as_str())
        .x_grid_spacer(decade_spacer)
        .x_axis_formatter(|mark, range| {
            // Label the in-between marks too once zoomed inside a decade.
            if mark.step_size >= 1.0 || range.end() - range.start() < 1.0 {
                format!("{:.0}", 10f64.powf(mark.value))
            } else {
                String::new()
            }
        })
        .label_formatter(|name, value| {
            if name.is_empty() {
                return String::new();
            }
            format!(
                "{name}\nepisodes: {:.0}\nperformance: {:.4}",
                10f64.powf(value.x),
                value.y
            )
        })
        .include_x(x.start.log10())
        .include_x(x.end.log10())
        .include_y(y.start)
        .include_y(y.end)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // Items sharing a name share a legend entry, so bars hide with
            // their curve.
            for (trace, color) in chart.traces().iter().zip(chart.colors()) {
                let color = to_egui(color);
                let name = trace.label.as_str();

                for (px, m, s) in trace.plottable() {
                    let lx = px.log10();
                    let bar: PlotPoints = vec![[lx, m - s], [lx, m + s]].into();
                    plot_ui.line(Line::new(bar).name(name).color(color).width(1.0));
                    for cap_y in [m - s, m + s] {
                        let cap: PlotPoints =
                            vec![[lx - CAP_HALF_WIDTH, cap_y], [lx + CAP_HALF_WIDTH, cap_y]].into();
                        plot_ui.line(Line::new(cap).name(name).color(color).width(1.0));
                    }
                }

                let points: Vec<[f64; 2]> = trace
                    .plottable()
                    .map(|(px, m, _)| [px.log10(), m])
                    .collect();
                plot_ui.points(
                    Points::new(PlotPoints::from(points.clone()))
                        .name(name)
                        .color(color)
                        .radius(2.5),
                );
                plot_ui.line(
                    Line::new(PlotPoints::from(points))
                        .name(name)
                        .color(color)
                        .width(2.0),
                );
            }
        });
}

fn decade_spacer(input: GridInput) -> Vec<GridMark> {
    let (lo, hi) = input.bounds;
    log_grid_marks(lo, hi)
        .into_iter()
        .map(|(value, decade)| GridMark {
            value,
            step_size: if decade { 1.0 } else { 0.1 },
        })
        .collect()
}

fn legend_corner(corner: LegendCorner) -> Corner {
    match corner {
        LegendCorner::UpperRight => Corner::RightTop,
        LegendCorner::UpperLeft => Corner::LeftTop,
        LegendCorner::LowerLeft => Corner::LeftBottom,
        LegendCorner::LowerRight => Corner::RightBottom,
    }
}
