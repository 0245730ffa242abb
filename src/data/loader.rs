use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use super::model::{EpisodeAxis, PerformanceMatrix, Series};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a performance file could not be turned into a [`Series`].
///
/// Line numbers are 1-based and count every line of the file, comments
/// included, so they can be looked up directly in an editor.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no header line: the file only contains comments")]
    MissingHeader,

    #[error("line {line}: header line is empty")]
    EmptyHeader { line: usize },

    #[error("line {line}, column {column}: '{token}' is not a number")]
    BadNumber {
        line: usize,
        column: usize,
        token: String,
    },

    #[error("line {line}: expected {expected} values but found {found}")]
    ShortRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("no trial rows after the header line")]
    NoTrials,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read and parse one performance file.
///
/// File layout:
/// ```text
/// # comment lines (leading block only)
/// v_1 v_2 ... v_M        cumulative episodes after each iteration
/// p_11 p_12 ... p_1M     trial 1
/// ...
/// p_N1 p_N2 ... p_NM     trial N
/// ```
pub fn load_series(title: &str, path: &Path) -> Result<Series, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_series(title, path, &text)
}

/// Parse the contents of a performance file already held in memory.
pub fn parse_series(title: &str, path: &Path, text: &str) -> Result<Series, LoadError> {
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l)).peekable();

    // Only the leading contiguous block counts as comments; a later '#'
    // line is data and fails numeric parsing.
    let mut comments = Vec::new();
    while let Some((_, line)) = lines.next_if(|(_, l)| l.starts_with('#')) {
        comments.push(line.trim_start_matches('#').trim().to_string());
    }

    let (header_no, header) = lines.next().ok_or(LoadError::MissingHeader)?;
    if header.trim().is_empty() {
        return Err(LoadError::EmptyHeader { line: header_no });
    }
    let episodes = header
        .split(' ')
        .enumerate()
        .map(|(j, tok)| parse_token(tok, header_no, j + 1))
        .collect::<Result<Vec<f64>, _>>()?;
    let n_iters = episodes.len();

    let mut perf = PerformanceMatrix::with_iterations(n_iters);
    let mut row = Vec::with_capacity(n_iters);
    for (line_no, line) in lines {
        row.clear();
        for (j, tok) in line.split(' ').take(n_iters).enumerate() {
            row.push(parse_token(tok, line_no, j + 1)?);
        }
        if row.len() < n_iters {
            return Err(LoadError::ShortRow {
                line: line_no,
                expected: n_iters,
                found: row.len(),
            });
        }
        perf.push_trial(&row);
    }

    if perf.trials() == 0 {
        return Err(LoadError::NoTrials);
    }

    for c in &comments {
        debug!("{title}: # {c}");
    }

    Ok(Series {
        title: title.to_string(),
        path: path.to_path_buf(),
        comments,
        episodes: EpisodeAxis::new(episodes),
        perf,
    })
}

fn parse_token(tok: &str, line: usize, column: usize) -> Result<f64, LoadError> {
    tok.trim().parse::<f64>().map_err(|_| LoadError::BadNumber {
        line,
        column,
        token: tok.to_string(),
    })
}
