//! Descriptive statistics used by the tests and the charts.

/// z-score of the two-sided 95% normal interval.
pub const Z_95: f64 = 1.959_963_984_540_054;

/// Arithmetic mean; NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample variance (n - 1 denominator); NaN with fewer than two values.
pub fn sample_variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64
}

pub fn sample_std(values: &[f64]) -> f64 {
    sample_variance(values).sqrt()
}

/// Mean with a 95% normal-approximation interval, as `(mean, lower, upper)`.
///
/// With a single value the interval collapses onto the mean.
pub fn mean_interval(values: &[f64]) -> (f64, f64, f64) {
    let m = mean(values);
    if values.len() < 2 {
        return (m, m, m);
    }
    let half_width = Z_95 * sample_std(values) / (values.len() as f64).sqrt();
    (m, m - half_width, m + half_width)
}

/// `count` evenly spaced points from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Gaussian kernel density estimate evaluated on `grid`.
///
/// The bandwidth follows Scott's rule, `std * n^(-1/5)`. Returns `None` when
/// the sample has fewer than two values or no spread.
pub fn gaussian_kde(values: &[f64], grid: &[f64]) -> Option<Vec<f64>> {
    let std = sample_std(values);
    if values.len() < 2 || !std.is_finite() || std == 0.0 {
        return None;
    }
    let n = values.len() as f64;
    let bandwidth = std * n.powf(-0.2);
    let norm = 1.0 / (n * bandwidth * (2.0 * std::f64::consts::PI).sqrt());
    let density = grid
        .iter()
        .map(|x| {
            values
                .iter()
                .map(|v| {
                    let z = (x - v) / bandwidth;
                    (-0.5 * z * z).exp()
                })
                .sum::<f64>()
                * norm
        })
        .collect();
    Some(density)
}
