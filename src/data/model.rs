use std::path::PathBuf;

// ---------------------------------------------------------------------------
// EpisodeAxis – cumulative episode count after each iteration
// ---------------------------------------------------------------------------

/// The x axis of a series: one cumulative episode count per iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeAxis(Vec<f64>);

impl EpisodeAxis {
    pub fn new(values: Vec<f64>) -> Self {
        EpisodeAxis(values)
    }

    /// Number of iterations (`M`).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// PerformanceMatrix – trials × iterations
// ---------------------------------------------------------------------------

/// Row-major `N × M` matrix: one row per trial, one column per iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceMatrix {
    iterations: usize,
    values: Vec<f64>,
}

impl PerformanceMatrix {
    /// Start an empty matrix whose rows will all hold `iterations` values.
    pub fn with_iterations(iterations: usize) -> Self {
        PerformanceMatrix {
            iterations,
            values: Vec::new(),
        }
    }

    /// Append one trial. The loader guarantees `row.len() == iterations`.
    pub fn push_trial(&mut self, row: &[f64]) {
        debug_assert_eq!(row.len(), self.iterations);
        self.values.extend_from_slice(row);
    }

    /// Number of trials (`N`).
    pub fn trials(&self) -> usize {
        if self.iterations == 0 {
            0
        } else {
            self.values.len() / self.iterations
        }
    }

    /// Number of iterations (`M`).
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    #[cfg(test)]
    pub fn row(&self, trial: usize) -> &[f64] {
        let start = trial * self.iterations;
        &self.values[start..start + self.iterations]
    }

    /// Values of one iteration across all trials.
    pub fn column(&self, iteration: usize) -> impl Iterator<Item = f64> + '_ {
        self.values
            .iter()
            .skip(iteration)
            .step_by(self.iterations.max(1))
            .copied()
    }
}

// ---------------------------------------------------------------------------
// Series – one titled, file-backed dataset
// ---------------------------------------------------------------------------

/// One input file together with the title it is plotted under.
#[derive(Debug, Clone)]
pub struct Series {
    pub title: String,
    pub path: PathBuf,
    /// Leading `#` lines of the file, marker and surrounding blanks removed.
    pub comments: Vec<String>,
    pub episodes: EpisodeAxis,
    pub perf: PerformanceMatrix,
}

impl Series {
    pub fn trials(&self) -> usize {
        self.perf.trials()
    }

    pub fn iterations(&self) -> usize {
        self.episodes.len()
    }
}

// ---------------------------------------------------------------------------
// Aggregate – per-iteration statistics across trials
// ---------------------------------------------------------------------------

/// Mean and population standard deviation per iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_rows_and_columns() {
        let mut m = PerformanceMatrix::with_iterations(3);
        m.push_trial(&[1.0, 2.0, 3.0]);
        m.push_trial(&[4.0, 5.0, 6.0]);

        assert_eq!(m.trials(), 2);
        assert_eq!(m.iterations(), 3);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(m.column(1).collect::<Vec<_>>(), vec![2.0, 5.0]);
    }

    #[test]
    fn empty_matrix_has_no_trials() {
        let m = PerformanceMatrix::with_iterations(4);
        assert_eq!(m.trials(), 0);
    }
}
