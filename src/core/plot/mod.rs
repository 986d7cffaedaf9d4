//! Chart rendering for simulation run logs.
//!
//! One module per chart type. Every command validates its inputs, refuses
//! to overwrite an existing image, renders with plotters, and reports the
//! written path(s) plus the number of data points plotted.

pub mod histogram;
pub mod results;
pub mod species;
pub mod swarm;
pub mod temp_response;
pub mod violin;

use crate::error::Error;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotResult {
    pub outputs: Vec<String>,
    pub points: usize,
}

/// Map any backend/drawing error into a `chart.render_failed`.
pub(crate) fn render_err<E: std::fmt::Display>(context: &'static str) -> impl Fn(E) -> Error {
    move |e| Error::chart_render(e.to_string(), Some(context.to_string()))
}

/// Final path component as a string, used for output naming conventions.
pub(crate) fn basename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// `count` evenly spaced values over `[start, end]`, inclusive.
pub(crate) fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => (0..count)
            .map(|i| start + (end - start) * i as f64 / (count - 1) as f64)
            .collect(),
    }
}
