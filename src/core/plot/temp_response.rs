//! Exploration chart for ambient temperature vs flower temperature response.
//!
//! Synthetic data only: a sinusoidal ambient temperature over the daylight
//! hours, and a deliberately lumpy flower delta curve summing three sine
//! components across the 0-40 degree ambient range.

use super::{render_err, PlotResult};
use crate::error::Result;
use crate::log_status;
use crate::utils::io;
use plotters::prelude::*;
use std::f64::consts::PI;
use std::path::Path;

pub const OUTPUT_NAME: &str = "temp-response-graph.svg";

const DAY_START_HOUR: i32 = 6;
const DAY_END_HOUR: i32 = 20;
const AMBIENT_MAX: i32 = 40;

/// Ambient temperature at an hour of day, degrees. Integer-valued by
/// construction, peaking mid-afternoon.
pub(crate) fn ambient_temp(hour: i32) -> f64 {
    let phase = PI * (hour - DAY_START_HOUR) as f64 / (DAY_END_HOUR - DAY_START_HOUR) as f64;
    5.0 + (30.0 * phase.sin()).trunc()
}

/// Flower temperature delta for an ambient temperature, degrees.
pub(crate) fn flower_delta(ambient: i32) -> f64 {
    let t = ambient as f64;
    3.0 * (PI * 2.0 * (t + 1.0 / 40.0)).sin()
        + 3.0 * (PI * 4.0 * ((t + 2.0) / 40.0)).sin()
        + 3.0 * (PI * 7.0 * ((t + 5.0) / 40.0)).sin()
}

pub fn run(dir: &Path) -> Result<PlotResult> {
    let out_path = dir.join(OUTPUT_NAME);
    io::ensure_absent(&out_path)?;

    let hours: Vec<i32> = (DAY_START_HOUR..=DAY_END_HOUR).collect();
    let ambient: Vec<(f64, f64)> = hours
        .iter()
        .map(|&d| (d as f64, ambient_temp(d)))
        .collect();
    let flower: Vec<(f64, f64)> = hours
        .iter()
        .map(|&d| {
            let t = ambient_temp(d);
            (d as f64, t + flower_delta(t as i32))
        })
        .collect();
    let deltas: Vec<(f64, f64)> = (0..=AMBIENT_MAX)
        .map(|t| (t as f64, flower_delta(t)))
        .collect();

    let root = SVGBackend::new(&out_path, (960, 960)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err("temp-response"))?;
    let panels = root.split_evenly((2, 1));

    {
        let mut chart = ChartBuilder::on(&panels[0])
            .margin(10)
            .x_label_area_size(48)
            .y_label_area_size(56)
            .build_cartesian_2d(
                DAY_START_HOUR as f64..DAY_END_HOUR as f64,
                0f64..AMBIENT_MAX as f64,
            )
            .map_err(render_err("temp-response"))?;

        chart
            .configure_mesh()
            .x_desc("time of day")
            .y_desc("temp")
            .draw()
            .map_err(render_err("temp-response"))?;

        chart
            .draw_series(LineSeries::new(
                ambient.iter().copied(),
                BLUE.stroke_width(2),
            ))
            .map_err(render_err("temp-response"))?
            .label("Ambient temp")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

        chart
            .draw_series(LineSeries::new(
                flower.iter().copied(),
                RED.stroke_width(2),
            ))
            .map_err(render_err("temp-response"))?
            .label("Flower temps")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerMiddle)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(render_err("temp-response"))?;
    }

    {
        let delta_lo = deltas.iter().map(|&(_, d)| d).fold(f64::INFINITY, f64::min);
        let delta_hi = deltas
            .iter()
            .map(|&(_, d)| d)
            .fold(f64::NEG_INFINITY, f64::max);

        let mut chart = ChartBuilder::on(&panels[1])
            .margin(10)
            .x_label_area_size(48)
            .y_label_area_size(56)
            .build_cartesian_2d(0f64..AMBIENT_MAX as f64, delta_lo - 1.0..delta_hi + 1.0)
            .map_err(render_err("temp-response"))?;

        chart
            .configure_mesh()
            .x_desc("ambient temp")
            .y_desc("flower delta temp")
            .draw()
            .map_err(render_err("temp-response"))?;

        chart
            .draw_series(LineSeries::new(
                deltas.iter().copied(),
                GREEN.stroke_width(2),
            ))
            .map_err(render_err("temp-response"))?;
    }

    root.present().map_err(render_err("temp-response"))?;

    log_status!("plot", "Wrote {}", out_path.display());

    Ok(PlotResult {
        outputs: vec![out_path.display().to_string()],
        points: ambient.len() + flower.len() + deltas.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambient_is_bounded_and_peaks_midday() {
        for d in DAY_START_HOUR..=DAY_END_HOUR {
            let t = ambient_temp(d);
            assert!((5.0..=35.0).contains(&t), "hour {} gave {}", d, t);
            assert_eq!(t.fract(), 0.0, "ambient temps are whole degrees");
        }
        assert_eq!(ambient_temp(DAY_START_HOUR), 5.0);
        assert_eq!(ambient_temp(DAY_END_HOUR), 5.0);
        assert_eq!(ambient_temp(13), 35.0);
    }

    #[test]
    fn flower_delta_is_bounded_by_component_sum() {
        for t in 0..=AMBIENT_MAX {
            assert!(flower_delta(t).abs() <= 9.0 + 1e-9);
        }
    }

    #[test]
    fn run_refuses_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(OUTPUT_NAME), "occupied").unwrap();
        let err = run(dir.path()).unwrap_err();
        assert_eq!(err.code.as_str(), "output.file_exists");
    }
}
