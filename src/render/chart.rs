use std::ops::Range;
use std::path::PathBuf;

use palette::Srgb;

use crate::color::generate_palette;
use crate::data::model::{Aggregate, Series};

// ---------------------------------------------------------------------------
// Trace – one error-bar series on the chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Trace {
    pub label: String,
    pub episodes: Vec<f64>,
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
    pub trials: usize,
    pub source: PathBuf,
    pub comments: Vec<String>,
}

impl Trace {
    /// `(x, mean, std)` triples that can be placed on a log x axis.
    pub fn plottable(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.episodes
            .iter()
            .zip(&self.mean)
            .zip(&self.std)
            .map(|((&x, &m), &s)| (x, m, s))
            .filter(|(x, m, s)| *x > 0.0 && x.is_finite() && m.is_finite() && s.is_finite())
    }

    /// Number of points dropped by [`Trace::plottable`].
    pub fn skipped(&self) -> usize {
        self.episodes.len() - self.plottable().count()
    }
}

// ---------------------------------------------------------------------------
// Legend placement
// ---------------------------------------------------------------------------

/// Corner of the plot area holding the legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendCorner {
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

impl LegendCorner {
    /// Candidates in order of preference; ties go to the earlier one.
    pub const ALL: [LegendCorner; 4] = [
        LegendCorner::UpperRight,
        LegendCorner::UpperLeft,
        LegendCorner::LowerLeft,
        LegendCorner::LowerRight,
    ];
}

// Legend box size as a fraction of the plot area.
const LEGEND_WIDTH: f64 = 0.35;
const LEGEND_ROW_HEIGHT: f64 = 0.06;
const LEGEND_PADDING: f64 = 0.04;

// ---------------------------------------------------------------------------
// Chart – the accumulated figure
// ---------------------------------------------------------------------------

/// A figure accumulating one trace per series, in the order they were added.
/// That order is the draw order and the legend order.
#[derive(Debug, Clone)]
pub struct Chart {
    traces: Vec<Trace>,
    pub x_label: String,
    pub y_label: String,
}

impl Default for Chart {
    fn default() -> Self {
        Self {
            traces: Vec::new(),
            x_label: "Episodes".to_string(),
            y_label: "Performance".to_string(),
        }
    }
}

impl Chart {
    pub fn add_series(&mut self, series: &Series, agg: &Aggregate) {
        self.traces.push(Trace {
            label: series.title.clone(),
            episodes: series.episodes.values().to_vec(),
            mean: agg.mean.clone(),
            std: agg.std.clone(),
            trials: series.trials(),
            source: series.path.clone(),
            comments: series.comments.clone(),
        });
    }

    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }

    /// Labels in legend order.
    #[cfg(test)]
    pub fn legend_labels(&self) -> Vec<&str> {
        self.traces.iter().map(|t| t.label.as_str()).collect()
    }

    /// One colour per trace, stable for a given trace count.
    pub fn colors(&self) -> Vec<Srgb<u8>> {
        generate_palette(self.traces.len())
    }

    fn points(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.traces.iter().flat_map(|t| t.plottable())
    }

    /// Positive episode range, padded by a fraction of a decade on each side.
    pub fn x_range(&self) -> Range<f64> {
        let (lo, hi) = self
            .points()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (x, _, _)| {
                (lo.min(x), hi.max(x))
            });
        if !lo.is_finite() {
            return 1.0..10.0;
        }
        let pad = 10f64.powf(0.05);
        (lo / pad)..(hi * pad)
    }

    /// Range covering every error bar with a 5% margin.
    pub fn y_range(&self) -> Range<f64> {
        let (lo, hi) = self
            .points()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, m, s)| {
                (lo.min(m - s), hi.max(m + s))
            });
        if !lo.is_finite() {
            return 0.0..1.0;
        }
        let span = hi - lo;
        if span <= f64::EPSILON * hi.abs().max(1.0) {
            return (lo - 0.5)..(hi + 0.5);
        }
        (lo - 0.05 * span)..(hi + 0.05 * span)
    }

    /// Pick the corner whose legend box would hide the fewest data points.
    pub fn best_legend_corner(&self) -> LegendCorner {
        let x = self.x_range();
        let y = self.y_range();
        let (lx0, lx1) = (x.start.log10(), x.end.log10());

        // Normalise every mean and error-bar end into [0, 1]² axes space.
        let normalized: Vec<(f64, f64)> = self
            .points()
            .flat_map(|(px, m, s)| {
                let nx = (px.log10() - lx0) / (lx1 - lx0);
                [m - s, m, m + s].map(|py| (nx, (py - y.start) / (y.end - y.start)))
            })
            .collect();

        let w = LEGEND_WIDTH;
        let h = (LEGEND_PADDING + LEGEND_ROW_HEIGHT * self.traces.len() as f64).min(1.0);

        let covered = |corner: LegendCorner| {
            let (x0, y0) = match corner {
                LegendCorner::UpperRight => (1.0 - w, 1.0 - h),
                LegendCorner::UpperLeft => (0.0, 1.0 - h),
                LegendCorner::LowerLeft => (0.0, 0.0),
                LegendCorner::LowerRight => (1.0 - w, 0.0),
            };
            normalized
                .iter()
                .filter(|(nx, ny)| *nx >= x0 && *nx <= x0 + w && *ny >= y0 && *ny <= y0 + h)
                .count()
        };

        let mut best = LegendCorner::ALL[0];
        let mut best_count = covered(best);
        for corner in &LegendCorner::ALL[1..] {
            let count = covered(*corner);
            if count < best_count {
                best = *corner;
                best_count = count;
            }
        }
        best
    }
}

// ---------------------------------------------------------------------------
// Log-axis grid marks
// ---------------------------------------------------------------------------

/// Grid positions, in log10 space, between `lo` and `hi` (also log10).
/// Returns `(position, is_decade)`; decades are the labelled major marks.
pub fn log_grid_marks(lo: f64, hi: f64) -> Vec<(f64, bool)> {
    if !(lo.is_finite() && hi.is_finite()) || hi <= lo {
        return Vec::new();
    }
    let mut marks = Vec::new();
    let first = lo.floor() as i32;
    let last = hi.ceil() as i32;
    for decade in first..=last {
        for k in 1..10 {
            let pos = decade as f64 + (k as f64).log10();
            if pos >= lo && pos <= hi {
                marks.push((pos, k == 1));
            }
        }
    }
    marks
}
