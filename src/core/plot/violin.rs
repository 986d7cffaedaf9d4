//! Violin plot of fixation-time distributions.

use super::{basename, render_err, PlotResult};
use crate::dataset;
use crate::error::{Error, Result};
use crate::log_status;
use crate::stats;
use crate::utils::io;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

pub const DEFAULT_YMAX: f64 = 1000.0;

const KDE_POINTS: usize = 99;
const VIOLIN_CENTER: f64 = 1.0;
const VIOLIN_HALF_WIDTH: f64 = 0.5;
const MARK_HALF_WIDTH: f64 = 0.2;

#[derive(Debug, Clone)]
pub struct ViolinSpec {
    pub datafile: PathBuf,
    pub ymax: f64,
}

/// Violin outline: the mirrored, width-scaled density curve, as a closed
/// polygon (right side bottom-to-top, then left side top-to-bottom).
pub(crate) fn violin_outline(values: &[f64]) -> Vec<(f64, f64)> {
    let curve = stats::gaussian_kde(values, KDE_POINTS);
    let max_density = curve.iter().map(|&(_, d)| d).fold(0.0f64, f64::max);
    if max_density <= 0.0 {
        return Vec::new();
    }

    let mut outline: Vec<(f64, f64)> = curve
        .iter()
        .map(|&(y, d)| (VIOLIN_CENTER + d / max_density * VIOLIN_HALF_WIDTH, y))
        .collect();
    outline.extend(
        curve
            .iter()
            .rev()
            .map(|&(y, d)| (VIOLIN_CENTER - d / max_density * VIOLIN_HALF_WIDTH, y)),
    );
    outline
}

pub fn run(dir: &Path, spec: &ViolinSpec) -> Result<PlotResult> {
    if spec.ymax <= 0.0 {
        return Err(Error::validation_invalid_argument(
            "ymax",
            "ymax must be positive",
            Some(spec.ymax.to_string()),
        ));
    }

    let values = dataset::load_series(&spec.datafile, Some(super::histogram::NO_FIXATION_MARKER))?;
    let summary = stats::describe(&values)
        .ok_or_else(|| Error::data_empty(spec.datafile.display().to_string()))?;

    let out_path = dir.join(format!("fixation-violin-{}.png", basename(&spec.datafile)));
    io::ensure_absent(&out_path)?;

    let outline = violin_outline(&values);

    let root = BitMapBackend::new(&out_path, (720, 720)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err("violin"))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(16)
        .y_label_area_size(56)
        .build_cartesian_2d(0f64..2f64, 0f64..spec.ymax)
        .map_err(render_err("violin"))?;

    // no x categories to label for a single violin
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .y_desc("Fixation time (generations)")
        .draw()
        .map_err(render_err("violin"))?;

    chart
        .draw_series(std::iter::once(Polygon::new(
            outline.clone(),
            BLUE.mix(0.35).filled(),
        )))
        .map_err(render_err("violin"))?;
    chart
        .draw_series(std::iter::once(PathElement::new(outline, BLUE)))
        .map_err(render_err("violin"))?;

    // extrema whisker plus mean and median marks, matplotlib-style
    let marks = [
        PathElement::new(
            vec![(VIOLIN_CENTER, summary.min), (VIOLIN_CENTER, summary.max)],
            BLACK,
        ),
        horizontal_mark(summary.min),
        horizontal_mark(summary.max),
        horizontal_mark(summary.median),
        horizontal_mark(summary.mean),
    ];
    chart
        .draw_series(marks.into_iter())
        .map_err(render_err("violin"))?;

    root.present().map_err(render_err("violin"))?;

    log_status!("plot", "Wrote {}", out_path.display());

    Ok(PlotResult {
        outputs: vec![out_path.display().to_string()],
        points: values.len(),
    })
}

fn horizontal_mark(y: f64) -> PathElement<(f64, f64)> {
    PathElement::new(
        vec![
            (VIOLIN_CENTER - MARK_HALF_WIDTH, y),
            (VIOLIN_CENTER + MARK_HALF_WIDTH, y),
        ],
        BLACK,
    )
}
