//! Histogram of per-run fixation times.

use super::{basename, linspace, render_err, PlotResult};
use crate::dataset;
use crate::error::{Error, Result};
use crate::log_status;
use crate::utils::io;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

/// Marker used in fixation logs for runs that never reached fixation.
pub const NO_FIXATION_MARKER: &str = "NOFIX";

const BAR_WIDTH_FRACTION: f64 = 0.8;

#[derive(Debug, Clone)]
pub struct HistogramSpec {
    pub datafile: PathBuf,
    pub xmin: i64,
    pub xmax: i64,
    pub ymax: i64,
    pub title: String,
}

/// Edge positions and label density for a fixation-time axis.
///
/// Narrow spans get one bin per generation; wide spans are capped at 50
/// edges with sparse labelling.
pub(crate) fn binning(xmin: i64, xmax: i64) -> (Vec<f64>, i64) {
    let span = xmax - xmin;
    let (num_edges, tick_spacing) = if span <= 25 {
        (span, 5)
    } else if span <= 75 {
        (span, 10)
    } else {
        (50, 200)
    };
    let edges = linspace(xmin as f64 + 0.5, xmax as f64 - 0.5, num_edges.max(0) as usize);
    (edges, tick_spacing)
}

/// Count values into the half-open intervals between consecutive edges;
/// the last interval is closed. Values outside the edges are dropped.
pub(crate) fn bin_counts(values: &[f64], edges: &[f64]) -> Vec<u64> {
    if edges.len() < 2 {
        return Vec::new();
    }
    let mut counts = vec![0u64; edges.len() - 1];
    for &v in values {
        if v < edges[0] || v > edges[edges.len() - 1] {
            continue;
        }
        let mut idx = edges.len() - 2;
        for i in 0..edges.len() - 1 {
            if v < edges[i + 1] {
                idx = i;
                break;
            }
        }
        counts[idx] += 1;
    }
    counts
}

fn validate(spec: &HistogramSpec) -> Result<()> {
    if spec.xmax <= spec.xmin {
        return Err(Error::validation_invalid_argument(
            "xmax",
            format!("xmax must be greater than xmin ({})", spec.xmin),
            Some(spec.xmax.to_string()),
        ));
    }
    if spec.ymax <= 0 {
        return Err(Error::validation_invalid_argument(
            "ymax",
            "ymax must be positive",
            Some(spec.ymax.to_string()),
        ));
    }
    Ok(())
}

pub fn run(dir: &Path, spec: &HistogramSpec) -> Result<PlotResult> {
    validate(spec)?;

    let values = dataset::load_series(&spec.datafile, Some(NO_FIXATION_MARKER))?;

    let out_path = dir.join(format!(
        "fixation-histogram-{}.png",
        basename(&spec.datafile)
    ));
    io::ensure_absent(&out_path)?;

    let (edges, tick_spacing) = binning(spec.xmin, spec.xmax);
    let counts = bin_counts(&values, &edges);

    let root = BitMapBackend::new(&out_path, (960, 720)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err("histogram"))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&spec.title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(48)
        .y_label_area_size(56)
        .build_cartesian_2d(
            spec.xmin as f64..spec.xmax as f64,
            0f64..spec.ymax as f64,
        )
        .map_err(render_err("histogram"))?;

    let span = spec.xmax - spec.xmin;
    chart
        .configure_mesh()
        .x_labels((span / tick_spacing).max(1) as usize + 1)
        .x_desc("Fixation time (generations)")
        .y_desc("Frequency")
        .draw()
        .map_err(render_err("histogram"))?;

    chart
        .draw_series(counts.iter().enumerate().filter(|(_, &c)| c > 0).map(
            |(i, &count)| {
                let width = edges[i + 1] - edges[i];
                let center = (edges[i] + edges[i + 1]) / 2.0;
                let half = width * BAR_WIDTH_FRACTION / 2.0;
                Rectangle::new(
                    [(center - half, 0.0), (center + half, count as f64)],
                    BLUE.filled(),
                )
            },
        ))
        .map_err(render_err("histogram"))?;

    root.present().map_err(render_err("histogram"))?;

    log_status!("plot", "Wrote {}", out_path.display());

    Ok(PlotResult {
        outputs: vec![out_path.display().to_string()],
        points: values.len(),
    })
}
