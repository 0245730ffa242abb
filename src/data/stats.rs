use statrs::statistics::Statistics;

use super::model::{Aggregate, PerformanceMatrix};

/// Reduce the trial axis: mean and population standard deviation
/// (no Bessel correction) for every iteration column.
pub fn aggregate(perf: &PerformanceMatrix) -> Aggregate {
    let (mean, std) = (0..perf.iterations())
        .map(|j| {
            let column: Vec<f64> = perf.column(j).collect();
            (column.iter().mean(), column.iter().population_std_dev())
        })
        .unzip();
    Aggregate { mean, std }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[&[f64]]) -> PerformanceMatrix {
        let mut m = PerformanceMatrix::with_iterations(rows[0].len());
        for r in rows {
            m.push_trial(r);
        }
        m
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-12, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn known_matrix() {
        let agg = aggregate(&matrix(&[&[1.0, 2.0, 3.0], &[3.0, 4.0, 5.0]]));
        assert_close(&agg.mean, &[2.0, 3.0, 4.0]);
        assert_close(&agg.std, &[1.0, 1.0, 1.0]);
    }

    #[test]
    fn single_trial_has_zero_spread() {
        let agg = aggregate(&matrix(&[&[0.3, -1.5, 7.25]]));
        assert_close(&agg.mean, &[0.3, -1.5, 7.25]);
        assert_close(&agg.std, &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn uniform_column_has_zero_std() {
        let agg = aggregate(&matrix(&[&[5.0, 1.0], &[5.0, 2.0], &[5.0, 6.0]]));
        assert_eq!(agg.std[0], 0.0);
        assert!(agg.std[1] > 0.0);
    }

    #[test]
    fn population_not_sample_std() {
        // values 2,4,4,4,5,5,7,9: population std is exactly 2
        let rows: Vec<[f64; 1]> = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]
            .iter()
            .map(|&v| [v])
            .collect();
        let refs: Vec<&[f64]> = rows.iter().map(|r| r.as_slice()).collect();
        let agg = aggregate(&matrix(&refs));
        assert_close(&agg.mean, &[5.0]);
        assert_close(&agg.std, &[2.0]);
    }

    #[test]
    fn output_length_matches_iterations() {
        let agg = aggregate(&matrix(&[&[1.0; 7], &[2.0; 7], &[3.0; 7]]));
        assert_eq!(agg.mean.len(), 7);
        assert_eq!(agg.std.len(), 7);
    }
}
