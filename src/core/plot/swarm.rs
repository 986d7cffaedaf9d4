//! Swarm plot of flower marker-point counts across runs.

use super::{render_err, PlotResult};
use crate::dataset;
use crate::error::Result;
use crate::log_status;
use crate::utils::io;
use crate::utils::slugify;
use crate::utils::validation;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

/// The surveyed marker-point range: 380nm to 580nm in 10nm steps. The
/// axis always shows the full range even when some marker points have no
/// data.
pub const MARKER_POINT_MIN: i64 = 380;
pub const MARKER_POINT_MAX: i64 = 580;
pub const MARKER_POINT_STEP: i64 = 10;

pub const DEFAULT_YMAX: f64 = 23500.0;

// sideways spread tuning: counts landing in the same vertical cell are
// fanned out symmetrically around the marker-point column
const CELL_COUNT: f64 = 80.0;
const OFFSET_STEP: f64 = 1.2;
const OFFSET_LIMIT: f64 = 4.0;

#[derive(Debug, Clone)]
pub struct SwarmSpec {
    pub title: String,
    pub files: Vec<PathBuf>,
}

/// Snap a raw marker-point value onto the surveyed grid, or None when it
/// falls outside the plotted range.
pub(crate) fn snap_marker_point(value: f64) -> Option<i64> {
    let snapped = (value / MARKER_POINT_STEP as f64).round() as i64 * MARKER_POINT_STEP;
    if (MARKER_POINT_MIN..=MARKER_POINT_MAX).contains(&snapped) {
        Some(snapped)
    } else {
        None
    }
}

/// Deterministic beeswarm layout for one marker-point column.
///
/// Counts are sorted, bucketed into vertical cells, and fanned out
/// `0, +s, -s, +2s, -2s, ...` within each cell so ties stay visible.
pub(crate) fn column_offsets(counts: &[f64], ymax: f64) -> Vec<(f64, f64)> {
    let cell_height = ymax / CELL_COUNT;
    let mut sorted = counts.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut placed = Vec::with_capacity(sorted.len());
    let mut cell_of_prev: Option<i64> = None;
    let mut index_in_cell = 0usize;

    for y in sorted {
        let cell = (y / cell_height).floor() as i64;
        if cell_of_prev == Some(cell) {
            index_in_cell += 1;
        } else {
            index_in_cell = 0;
            cell_of_prev = Some(cell);
        }

        let rank = index_in_cell.div_ceil(2) as f64;
        let sign = if index_in_cell % 2 == 0 { 1.0 } else { -1.0 };
        let offset = (rank * OFFSET_STEP * sign).clamp(-OFFSET_LIMIT, OFFSET_LIMIT);
        placed.push((offset, y));
    }

    placed
}

pub fn run(dir: &Path, spec: &SwarmSpec) -> Result<PlotResult> {
    validation::require_non_empty_vec(&spec.files, "countfile", "At least one count file is required")?;

    // all inputs are validated before any of them is read
    for file in &spec.files {
        io::ensure_input_file(file)?;
    }

    let mut by_marker: Vec<(i64, Vec<f64>)> = (MARKER_POINT_MIN..=MARKER_POINT_MAX)
        .step_by(MARKER_POINT_STEP as usize)
        .map(|mp| (mp, Vec::new()))
        .collect();

    let mut total = 0usize;
    for file in &spec.files {
        for (marker, count) in dataset::load_pairs(file)? {
            if let Some(snapped) = snap_marker_point(marker) {
                let idx = ((snapped - MARKER_POINT_MIN) / MARKER_POINT_STEP) as usize;
                by_marker[idx].1.push(count);
                total += 1;
            }
        }
    }

    let out_path = dir.join(format!(
        "mp-distrib-swarmplot-{}.svg",
        slugify::slugify_title(&spec.title)
    ));
    io::ensure_absent(&out_path)?;

    let root = SVGBackend::new(&out_path, (1080, 720)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err("swarm"))?;

    let x_range = (MARKER_POINT_MIN - MARKER_POINT_STEP) as f64
        ..(MARKER_POINT_MAX + MARKER_POINT_STEP) as f64;

    let mut chart = ChartBuilder::on(&root)
        .caption(&spec.title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(56)
        .y_label_area_size(72)
        .build_cartesian_2d(x_range, 0f64..DEFAULT_YMAX)
        .map_err(render_err("swarm"))?;

    chart
        .configure_mesh()
        .x_labels(by_marker.len() + 1)
        .x_desc("marker_point")
        .y_desc("count")
        .draw()
        .map_err(render_err("swarm"))?;

    for (series_idx, (marker, counts)) in by_marker.iter().enumerate() {
        let color = Palette99::pick(series_idx).to_rgba();
        let placed = column_offsets(counts, DEFAULT_YMAX);
        chart
            .draw_series(placed.iter().map(|&(offset, y)| {
                Circle::new((*marker as f64 + offset, y), 3, color.filled())
            }))
            .map_err(render_err("swarm"))?;
    }

    root.present().map_err(render_err("swarm"))?;

    log_status!("plot", "Wrote {} ({} points)", out_path.display(), total);

    Ok(PlotResult {
        outputs: vec![out_path.display().to_string()],
        points: total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_keeps_values_on_the_grid() {
        assert_eq!(snap_marker_point(380.0), Some(380));
        assert_eq!(snap_marker_point(444.0), Some(440));
        assert_eq!(snap_marker_point(446.0), Some(450));
        assert_eq!(snap_marker_point(580.0), Some(580));
    }

    #[test]
    fn snap_drops_out_of_range_values() {
        assert_eq!(snap_marker_point(370.0), None);
        assert_eq!(snap_marker_point(600.0), None);
        assert_eq!(snap_marker_point(-1000.0), None);
    }

    #[test]
    fn ties_fan_out_symmetrically() {
        let placed = column_offsets(&[500.0, 500.0, 500.0], DEFAULT_YMAX);
        let offsets: Vec<f64> = placed.iter().map(|&(o, _)| o).collect();
        assert_eq!(offsets, vec![0.0, -OFFSET_STEP, OFFSET_STEP]);
    }

    #[test]
    fn distant_counts_stay_centered() {
        let placed = column_offsets(&[100.0, 10000.0, 20000.0], DEFAULT_YMAX);
        assert!(placed.iter().all(|&(o, _)| o == 0.0));
    }

    #[test]
    fn offsets_never_exceed_the_limit() {
        let counts = vec![42.0; 64];
        let placed = column_offsets(&counts, DEFAULT_YMAX);
        assert!(placed
            .iter()
            .all(|&(o, _)| o.abs() <= OFFSET_LIMIT + 1e-9));
    }

    #[test]
    fn run_requires_at_least_one_file() {
        let spec = SwarmSpec {
            title: "t".to_string(),
            files: Vec::new(),
        };
        let err = run(Path::new("."), &spec).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
    }

    #[test]
    fn run_validates_every_input() {
        let spec = SwarmSpec {
            title: "t".to_string(),
            files: vec![PathBuf::from("/nonexistent/mp.csv")],
        };
        let err = run(Path::new("."), &spec).unwrap_err();
        assert_eq!(err.code.as_str(), "input.file_not_found");
    }
}
