//! Loading of simulation output logs.
//!
//! Three shapes occur across the run logs: a single number per line
//! (fixation times), comma-separated pairs (generation counts and
//! marker-point counts), and the ten-field summary rows produced by the
//! `sta` post-processing pipeline.

use crate::error::{Error, Result};
use crate::utils::io;
use serde::Serialize;
use std::path::Path;

/// Load a one-number-per-line series.
///
/// Blank lines are skipped, as is any line starting with `comment_marker`
/// (the fixation logs record runs that never fixated as `NOFIX`). Anything
/// else that fails to parse is an error naming the file and line.
pub fn load_series(path: &Path, comment_marker: Option<&str>) -> Result<Vec<f64>> {
    io::ensure_input_file(path)?;
    let content = io::read_file(path, "read data file")?;

    let mut values = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(marker) = comment_marker {
            if trimmed.starts_with(marker) {
                continue;
            }
        }
        let value: f64 = trimmed.parse().map_err(|_| {
            Error::data_parse(
                path.display().to_string(),
                Some(idx + 1),
                format!("expected a number, found '{}'", trimmed),
            )
        })?;
        values.push(value);
    }

    Ok(values)
}

/// Load a two-column CSV series (`x,y` per line).
///
/// An empty file yields an empty series; the marker-point logs are often
/// empty for runs that produced no flowers of interest.
pub fn load_pairs(path: &Path) -> Result<Vec<(f64, f64)>> {
    io::ensure_input_file(path)?;
    let content = io::read_file(path, "read data file")?;

    let mut pairs = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let fields = parse_numeric_fields(path, idx + 1, trimmed)?;
        if fields.len() != 2 {
            return Err(Error::data_parse(
                path.display().to_string(),
                Some(idx + 1),
                format!("expected 2 comma-separated fields, found {}", fields.len()),
            ));
        }
        pairs.push((fields[0], fields[1]));
    }

    Ok(pairs)
}

/// One row of the summary statistics CSV:
/// `constancy,patchiness,n,min,q1,median,q3,max,mean,sd`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsRow {
    pub constancy: f64,
    pub patchiness: f64,
    pub n: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
    pub sd: f64,
}

pub fn load_stats_rows(path: &Path) -> Result<Vec<StatsRow>> {
    io::ensure_input_file(path)?;
    let content = io::read_file(path, "read stats file")?;

    let mut rows = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let f = parse_numeric_fields(path, idx + 1, trimmed)?;
        if f.len() != 10 {
            return Err(Error::data_parse(
                path.display().to_string(),
                Some(idx + 1),
                format!("expected 10 comma-separated fields, found {}", f.len()),
            ));
        }
        rows.push(StatsRow {
            constancy: f[0],
            patchiness: f[1],
            n: f[2],
            min: f[3],
            q1: f[4],
            median: f[5],
            q3: f[6],
            max: f[7],
            mean: f[8],
            sd: f[9],
        });
    }

    if rows.is_empty() {
        return Err(Error::data_empty(path.display().to_string()));
    }

    Ok(rows)
}

fn parse_numeric_fields(path: &Path, line_no: usize, line: &str) -> Result<Vec<f64>> {
    line.split(',')
        .map(|field| {
            let field = field.trim();
            field.parse::<f64>().map_err(|_| {
                Error::data_parse(
                    path.display().to_string(),
                    Some(line_no),
                    format!("expected a number, found '{}'", field),
                )
            })
        })
        .collect()
}
