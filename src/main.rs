mod app;
mod cli;
mod color;
mod data;
mod render;
mod state;
mod ui;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use cli::{Cli, SeriesSpec, USAGE};
use data::{loader, stats};
use render::chart::Chart;
use render::{DisplayProbe, EnvDisplayProbe, RenderConfig};

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let specs = match cli::pair_arguments(&cli.args) {
        Ok(specs) => specs,
        Err(e) => {
            log::debug!("bad command line: {e}");
            println!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(&specs, &EnvDisplayProbe) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(specs: &[SeriesSpec], probe: &dyn DisplayProbe) -> Result<()> {
    let config = RenderConfig::default();
    let mode = render::choose_output(probe, &config);
    info!("Output: {mode:?}");

    let chart = build_chart(specs)?;
    render::finish(chart, mode, &config)
}

/// Load and aggregate every series, in command-line order. The first bad
/// file aborts the whole run.
fn build_chart(specs: &[SeriesSpec]) -> Result<Chart> {
    let mut chart = Chart::default();
    for spec in specs {
        let series = loader::load_series(&spec.title, &spec.path)
            .with_context(|| format!("loading '{}' from {}", spec.title, spec.path.display()))?;
        let agg = stats::aggregate(&series.perf);
        info!(
            "Loaded '{}': {} trials × {} iterations",
            series.title,
            series.trials(),
            series.iterations()
        );
        chart.add_series(&series, &agg);
    }

    for trace in chart.traces() {
        if trace.skipped() > 0 {
            warn!(
                "'{}': {} points with non-positive episode counts cannot be shown on a log axis",
                trace.label,
                trace.skipped()
            );
        }
    }
    Ok(chart)
}
