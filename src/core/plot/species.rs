//! Two plant species population counts over generations, from one run.

use super::{basename, render_err, PlotResult};
use crate::dataset;
use crate::error::{Error, Result};
use crate::log_status;
use crate::utils::io;
use crate::utils::parser;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct SpeciesSpec {
    pub log_basename: String,
    pub xmax: f64,
    pub ymax: f64,
    pub title: String,
}

/// Chart title, with the run id folded in when the log naming allows it
/// (`...-<runid>-log...`).
pub(crate) fn plot_title(log_basename: &str, title: &str) -> String {
    match parser::extract_first(log_basename, r".*-(.*)-log") {
        Some(run_id) if !run_id.is_empty() => {
            format!("Sample run [id {}]: {}", run_id, title)
        }
        _ => title.to_string(),
    }
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    spec: &SpeciesSpec,
    title: &str,
    series1: &[(f64, f64)],
    series2: &[(f64, f64)],
) -> std::result::Result<(), String> {
    root.fill(&WHITE).map_err(|e| e.to_string())?;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(48)
        .y_label_area_size(56)
        .build_cartesian_2d(0f64..spec.xmax, 0f64..spec.ymax)
        .map_err(|e| e.to_string())?;

    chart
        .configure_mesh()
        .x_desc("Generation")
        .y_desc("Number of Plants")
        .draw()
        .map_err(|e| e.to_string())?;

    chart
        .draw_series(LineSeries::new(series1.iter().copied(), &BLUE))
        .map_err(|e| e.to_string())?
        .label("Species X")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .draw_series(LineSeries::new(series2.iter().copied(), &RED))
        .map_err(|e| e.to_string())?
        .label("Species Y")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| e.to_string())?;

    root.present().map_err(|e| e.to_string())
}

pub fn run(dir: &Path, spec: &SpeciesSpec) -> Result<PlotResult> {
    if spec.xmax <= 0.0 || spec.ymax <= 0.0 {
        return Err(Error::validation_invalid_argument(
            "axis",
            "xmax and ymax must be positive",
            None,
        ));
    }

    let datafile1 = dir.join(format!("{}-s1.dat", spec.log_basename));
    let datafile2 = dir.join(format!("{}-s2.dat", spec.log_basename));

    let series1 = dataset::load_pairs(&datafile1)?;
    let series2 = dataset::load_pairs(&datafile2)?;

    let stem = basename(&datafile1);
    let out_png = dir.join(format!("species-over-time-plot-{}.png", stem));
    let out_svg = dir.join(format!("species-over-time-plot-{}.svg", stem));
    io::ensure_absent(&out_png)?;
    io::ensure_absent(&out_svg)?;

    let title = plot_title(&spec.log_basename, &spec.title);

    {
        let root = BitMapBackend::new(&out_png, (960, 720)).into_drawing_area();
        draw(&root, spec, &title, &series1, &series2).map_err(render_err("species png"))?;
    }
    {
        let root = SVGBackend::new(&out_svg, (960, 720)).into_drawing_area();
        draw(&root, spec, &title, &series1, &series2).map_err(render_err("species svg"))?;
    }

    log_status!("plot", "Wrote {} and {}", out_png.display(), out_svg.display());

    Ok(PlotResult {
        outputs: vec![
            out_png.display().to_string(),
            out_svg.display().to_string(),
        ],
        points: series1.len() + series2.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn title_includes_extracted_run_id() {
        let title = plot_title("mp-experiment-0412-log", "Two species");
        assert_eq!(title, "Sample run [id 0412]: Two species");
    }

    #[test]
    fn title_falls_back_without_log_pattern() {
        assert_eq!(plot_title("plainbase", "Two species"), "Two species");
    }

    #[test]
    fn run_requires_both_species_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("run-1-log-s1.dat"), "0,10\n1,12\n").unwrap();
        // -s2.dat is missing

        let spec = SpeciesSpec {
            log_basename: "run-1-log".to_string(),
            xmax: 100.0,
            ymax: 200.0,
            title: "t".to_string(),
        };
        let err = run(dir.path(), &spec).unwrap_err();
        assert_eq!(err.code.as_str(), "input.file_not_found");
    }

    #[test]
    fn run_rejects_nonpositive_axes() {
        let spec = SpeciesSpec {
            log_basename: "base".to_string(),
            xmax: 0.0,
            ymax: 200.0,
            title: "t".to_string(),
        };
        let err = run(Path::new("."), &spec).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
    }
}
