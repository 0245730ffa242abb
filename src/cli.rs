use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

pub const USAGE: &str =
    "Usage : perf-plot perf_title1 perf_filename1 [perf_title2 perf_filename2 ...]";

/// Plot benchmark performance files as mean ± std error bars over a
/// logarithmic episode axis.
#[derive(Debug, Parser)]
#[command(
    name = "perf-plot",
    about,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Alternating titles and performance files: TITLE FILE [TITLE FILE ...]
    #[arg(value_name = "TITLE FILE", allow_hyphen_values = true, trailing_var_arg = true)]
    pub args: Vec<String>,
}

/// One `(title, filepath)` pair from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesSpec {
    pub title: String,
    pub path: PathBuf,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("no performance files given")]
    Empty,
    #[error("title '{0}' has no matching file")]
    Unpaired(String),
}

/// Group positional values into `(title, path)` pairs, keeping their order.
pub fn pair_arguments(args: &[String]) -> Result<Vec<SeriesSpec>, UsageError> {
    if args.is_empty() {
        return Err(UsageError::Empty);
    }
    if args.len() % 2 != 0 {
        return Err(UsageError::Unpaired(args[args.len() - 1].clone()));
    }
    Ok(args
        .chunks_exact(2)
        .map(|pair| SeriesSpec {
            title: pair[0].clone(),
            path: PathBuf::from(&pair[1]),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn pairs_keep_command_line_order() {
        let specs = pair_arguments(&strings(&["NAC", "nac.txt", "VAC", "vac.txt"])).unwrap();
        assert_eq!(
            specs,
            vec![
                SeriesSpec { title: "NAC".into(), path: "nac.txt".into() },
                SeriesSpec { title: "VAC".into(), path: "vac.txt".into() },
            ]
        );
    }

    #[test]
    fn odd_count_is_a_usage_error() {
        let err = pair_arguments(&strings(&["t1", "f1", "t2"])).unwrap_err();
        assert_eq!(err, UsageError::Unpaired("t2".into()));
    }

    #[test]
    fn no_arguments_is_a_usage_error() {
        assert_eq!(pair_arguments(&[]).unwrap_err(), UsageError::Empty);
    }

    #[test]
    fn clap_collects_hyphen_leading_titles() {
        let cli = Cli::try_parse_from(["perf-plot", "-baseline", "base.txt"]).unwrap();
        assert_eq!(cli.args, strings(&["-baseline", "base.txt"]));
    }

    #[test]
    fn help_and_version_spellings_are_titles() {
        let cli = Cli::try_parse_from(["perf-plot", "-h", "f"]).unwrap();
        assert_eq!(cli.args, strings(&["-h", "f"]));

        let cli = Cli::try_parse_from(["perf-plot", "--help", "a", "-V", "b"]).unwrap();
        assert_eq!(cli.args, strings(&["--help", "a", "-V", "b"]));
        assert_eq!(pair_arguments(&cli.args).unwrap().len(), 2);
    }

    #[test]
    fn leading_double_dash_ends_options() {
        let cli = Cli::try_parse_from(["perf-plot", "--", "a"]).unwrap();
        assert_eq!(cli.args, strings(&["a"]));
        assert_eq!(pair_arguments(&cli.args).unwrap_err(), UsageError::Unpaired("a".into()));
    }

    #[test]
    fn clap_accepts_no_positionals() {
        let cli = Cli::try_parse_from(["perf-plot"]).unwrap();
        assert!(cli.args.is_empty());
    }
}
