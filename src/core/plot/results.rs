//! Pollination-time results across patchiness levels, with error bars.

use super::{render_err, PlotResult};
use crate::dataset::{self, StatsRow};
use crate::error::Result;
use crate::log_status;
use crate::utils::io;
use crate::utils::slugify;
use crate::utils::validation;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

const X_PADDING: f64 = 2.0;
const PATCHCONST_Y_RANGE: (f64, f64) = (140.0, 550.0);

#[derive(Debug, Clone)]
pub struct ResultsSpec {
    pub title: String,
    pub files: Vec<PathBuf>,
    /// Fix the y range to the patch-constancy window instead of scaling to
    /// the data.
    pub patch_constrained: bool,
}

/// Series label from the file's constancy column, e.g. `Constancy 0.9`.
pub(crate) fn series_label(rows: &[StatsRow]) -> String {
    let constancy = rows.first().map(|r| r.constancy).unwrap_or(0.0);
    format!("Constancy 0.{}", constancy as i64)
}

/// Axis ranges over every series: x padded by a fixed margin, y scaled to
/// cover mean±sd with five percent headroom.
pub(crate) fn axis_ranges(all: &[Vec<StatsRow>]) -> ((f64, f64), (f64, f64)) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for rows in all {
        for row in rows {
            x_min = x_min.min(row.patchiness);
            x_max = x_max.max(row.patchiness);
            y_min = y_min.min(row.mean - row.sd);
            y_max = y_max.max(row.mean + row.sd);
        }
    }

    let headroom = (y_max - y_min).abs() * 0.05;
    (
        (x_min - X_PADDING, x_max + X_PADDING),
        ((y_min - headroom).min(0.0), y_max + headroom),
    )
}

pub fn run(dir: &Path, spec: &ResultsSpec) -> Result<PlotResult> {
    validation::require_non_empty_vec(&spec.files, "statsfile", "At least one stats file is required")?;

    for file in &spec.files {
        io::ensure_input_file(file)?;
    }

    let all: Vec<Vec<StatsRow>> = spec
        .files
        .iter()
        .map(|file| dataset::load_stats_rows(file))
        .collect::<Result<_>>()?;

    let out_path = dir.join(format!(
        "graph-{}.svg",
        slugify::slugify_title(&spec.title)
    ));
    io::ensure_absent(&out_path)?;

    let ((x_lo, x_hi), data_y) = axis_ranges(&all);
    let (y_lo, y_hi) = if spec.patch_constrained {
        PATCHCONST_Y_RANGE
    } else {
        data_y
    };

    let root = SVGBackend::new(&out_path, (960, 720)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err("results"))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&spec.title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
        .map_err(render_err("results"))?;

    chart
        .configure_mesh()
        .x_desc("<--big patches         Patchiness         small patches-->")
        .y_desc("Time to 50% pollination of Species 1")
        .draw()
        .map_err(render_err("results"))?;

    for (idx, rows) in all.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        let label = series_label(rows);

        chart
            .draw_series(LineSeries::new(
                rows.iter().map(|r| (r.patchiness, r.mean)),
                color.stroke_width(2),
            ))
            .map_err(render_err("results"))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

        chart
            .draw_series(rows.iter().map(|r| {
                ErrorBar::new_vertical(
                    r.patchiness,
                    r.mean - r.sd,
                    r.mean,
                    r.mean + r.sd,
                    color.filled(),
                    10,
                )
            }))
            .map_err(render_err("results"))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err("results"))?;

    root.present().map_err(render_err("results"))?;

    log_status!("plot", "Wrote {}", out_path.display());

    Ok(PlotResult {
        outputs: vec![out_path.display().to_string()],
        points: all.iter().map(Vec::len).sum(),
    })
}
