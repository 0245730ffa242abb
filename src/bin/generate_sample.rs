use std::fmt::Write as _;
use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const N_TRIALS: usize = 10;
const N_LEARNING_STEPS: usize = 30;

/// Episodes per learning step: 1 2 3 ... 9 10 20 30 ... 90 100 200 ...
fn episodes_per_step(step: usize) -> u64 {
    10u64.pow((step / 10) as u32) * (step % 10 + 1) as u64
}

/// Box-Muller transform for normal distribution
fn gauss(rng: &mut StdRng, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.gen::<f64>().max(1e-15);
    let u2: f64 = rng.gen();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + std_dev * z
}

/// Saturating learning curve: approaches `ceiling` as episodes grow.
fn learning_curve(episodes: f64, rate: f64, ceiling: f64) -> f64 {
    ceiling * (1.0 - (-rate * episodes.ln_1p()).exp())
}

fn perf_file(name: &str, rate: f64, noise: f64, rng: &mut StdRng) -> String {
    let mut out = String::new();
    out.push_str("# Synthetic performance benchmark\n");
    let _ = writeln!(out, "# agent={name}");
    let _ = writeln!(out, "# nTrials={N_TRIALS}");
    let _ = writeln!(out, "# nLearningStep={N_LEARNING_STEPS}");

    let totals: Vec<u64> = (0..N_LEARNING_STEPS)
        .scan(0u64, |total, step| {
            *total += episodes_per_step(step);
            Some(*total)
        })
        .collect();
    let header: Vec<String> = totals.iter().map(|t| t.to_string()).collect();
    out.push_str(&header.join(" "));
    out.push('\n');

    let rows: Vec<String> = (0..N_TRIALS)
        .map(|_| {
            let trial_rate = rate * (1.0 + gauss(rng, 0.0, 0.1));
            totals
                .iter()
                .map(|&t| {
                    let v = learning_curve(t as f64, trial_rate, 1.0) + gauss(rng, 0.0, noise);
                    v.to_string()
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    // No newline after the last trial, like the benchmark writer.
    out.push_str(&rows.join("\n"));
    out
}

fn main() {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let mut rng = StdRng::seed_from_u64(42);

    let agents = [("fast", 0.6, 0.03), ("slow", 0.25, 0.05)];
    let mut plot_command = String::from("perf-plot");

    for (name, rate, noise) in agents {
        let path = out_dir.join(format!("sample_perf_{name}"));
        let text = perf_file(name, rate, noise, &mut rng);
        std::fs::write(&path, text).expect("Failed to write sample file");
        println!("Wrote {N_TRIALS} trials to {}", path.display());
        let _ = write!(plot_command, " {name} {}", path.display());
    }

    println!("To plot the results, use command :\n{plot_command}");
}
