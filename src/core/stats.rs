//! Descriptive statistics and kernel density estimation over run data.

use serde::Serialize;

/// Five-number summary plus mean and sample standard deviation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptive {
    pub n: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
    pub sd: f64,
}

/// Summarize a slice of values. Returns None for empty input.
pub fn describe(values: &[f64]) -> Option<Descriptive> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let sd = if n > 1 {
        let var = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n as f64 - 1.0);
        var.sqrt()
    } else {
        0.0
    };

    Some(Descriptive {
        n,
        min: sorted[0],
        q1: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q3: quantile(&sorted, 0.75),
        max: sorted[n - 1],
        mean,
        sd,
    })
}

/// Linear-interpolation quantile over a sorted slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = pos - lo as f64;
        sorted[lo] * (1.0 - frac) + sorted[hi] * frac
    }
}

/// Gaussian kernel density estimate evaluated at `points` evenly spaced
/// positions across the data range. Bandwidth follows Scott's rule.
///
/// Returns (position, density) pairs; densities are unnormalized only in
/// the sense that callers scale them to a drawing width anyway.
pub fn gaussian_kde(values: &[f64], points: usize) -> Vec<(f64, f64)> {
    if values.is_empty() || points == 0 {
        return Vec::new();
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let sd = if values.len() > 1 {
        (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt()
    } else {
        0.0
    };

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    // Scott's rule; fall back to a fixed width for degenerate data so a
    // constant-valued sample still draws as a narrow bump
    let mut bandwidth = sd * n.powf(-0.2);
    if bandwidth <= 0.0 {
        bandwidth = (max - min).max(1.0) * 0.05;
    }

    let norm = 1.0 / (n * bandwidth * (2.0 * std::f64::consts::PI).sqrt());

    (0..points)
        .map(|i| {
            let x = if points == 1 {
                (min + max) / 2.0
            } else {
                min + (max - min) * i as f64 / (points - 1) as f64
            };
            let density: f64 = values
                .iter()
                .map(|v| {
                    let z = (x - v) / bandwidth;
                    (-0.5 * z * z).exp()
                })
                .sum::<f64>()
                * norm;
            (x, density)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_handles_simple_series() {
        let d = describe(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(d.n, 8);
        assert_eq!(d.min, 2.0);
        assert_eq!(d.max, 9.0);
        assert_eq!(d.mean, 5.0);
        assert!((d.sd - 2.138).abs() < 0.001);
        assert_eq!(d.median, 4.5);
    }

    #[test]
    fn describe_returns_none_for_empty() {
        assert!(describe(&[]).is_none());
    }

    #[test]
    fn describe_single_value() {
        let d = describe(&[3.0]).unwrap();
        assert_eq!(d.min, 3.0);
        assert_eq!(d.median, 3.0);
        assert_eq!(d.max, 3.0);
        assert_eq!(d.sd, 0.0);
    }

    #[test]
    fn quantiles_interpolate_linearly() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&sorted, 0.5), 2.5);
        assert_eq!(quantile(&sorted, 0.25), 1.75);
        assert_eq!(quantile(&sorted, 1.0), 4.0);
        assert_eq!(quantile(&sorted, 0.0), 1.0);
    }

    #[test]
    fn kde_covers_the_data_range() {
        let values = [100.0, 110.0, 120.0, 130.0, 200.0];
        let curve = gaussian_kde(&values, 99);
        assert_eq!(curve.len(), 99);
        assert_eq!(curve.first().unwrap().0, 100.0);
        assert_eq!(curve.last().unwrap().0, 200.0);
        assert!(curve.iter().all(|&(_, d)| d >= 0.0));
    }

    #[test]
    fn kde_peaks_near_the_data_mass() {
        let values = [50.0, 50.0, 50.0, 51.0, 49.0, 200.0];
        let curve = gaussian_kde(&values, 151);
        let peak = curve
            .iter()
            .cloned()
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap())
            .unwrap();
        assert!((peak.0 - 50.0).abs() < 10.0);
    }

    #[test]
    fn kde_tolerates_constant_data() {
        let curve = gaussian_kde(&[5.0, 5.0, 5.0], 9);
        assert_eq!(curve.len(), 9);
        assert!(curve.iter().all(|&(_, d)| d.is_finite()));
    }
}
