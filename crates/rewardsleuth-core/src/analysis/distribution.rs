/// Satisfaction rating distribution — a Gaussian kernel density estimate
/// suitable for drawing as a smooth filled curve.
///
/// Bandwidth follows Silverman's rule of thumb (`1.06 · σ · n^(-1/5)`).
/// The ratings sit on a small ordinal scale, so a degenerate spread
/// (every rating identical, or a single row) is a real possibility;
/// those cases fall back to unit bandwidth so the curve still draws
/// instead of dividing by zero.
use crate::model::Dataset;

/// One sample of the estimated density curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityPoint {
    /// Rating value the density is evaluated at.
    pub x: f64,
    /// Estimated probability density at `x`.
    pub density: f64,
}

/// Estimate the satisfaction density at `samples` evenly spaced points.
///
/// The evaluation range is the data range padded by three bandwidths on
/// each side so the curve tails reach (near) zero. Returns an empty vec
/// for an empty table or for `samples < 2` (a one-point "curve" is not
/// drawable).
pub fn satisfaction_density(data: &Dataset, samples: usize) -> Vec<DensityPoint> {
    if data.is_empty() || samples < 2 {
        return Vec::new();
    }

    let ratings: Vec<f64> = data.iter().map(|r| r.satisfaction).collect();
    let n = ratings.len() as f64;

    let mean = ratings.iter().sum::<f64>() / n;
    let variance = ratings.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    let sigma = variance.sqrt();

    let mut bandwidth = 1.06 * sigma * n.powf(-0.2);
    if !bandwidth.is_finite() || bandwidth <= 0.0 {
        bandwidth = 1.0;
    }

    let min = ratings.iter().copied().fold(f64::INFINITY, f64::min);
    let max = ratings.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let lo = min - 3.0 * bandwidth;
    let hi = max + 3.0 * bandwidth;
    let step = (hi - lo) / (samples - 1) as f64;

    const INV_SQRT_TAU: f64 = 0.398_942_280_401_432_7; // 1 / sqrt(2π)
    let norm = 1.0 / (n * bandwidth);

    (0..samples)
        .map(|i| {
            let x = lo + step * i as f64;
            let density = ratings
                .iter()
                .map(|&xi| {
                    let t = (x - xi) / bandwidth;
                    INV_SQRT_TAU * (-0.5 * t * t).exp()
                })
                .sum::<f64>()
                * norm;
            DensityPoint { x, density }
        })
        .collect()
}
