use std::f64::consts::PI;

use crate::stats;

/// Floor for the smoothing bandwidth so zero-variance data never
/// collapses the kernel to a division by zero.
const MIN_BANDWIDTH: f64 = 1e-3;

/// How many bandwidths the curve support extends past the data range.
const SUPPORT_PAD: f64 = 3.0;

/// Gaussian kernel density estimate over a latency sample sequence.
///
/// The bandwidth follows Scott's rule of thumb, `std * n^(-1/5)`,
/// scaled by an adjustment factor: values below 1.0 make the curve
/// follow the samples more tightly.
pub struct GaussianKde {
    samples: Vec<f64>,
    bandwidth: f64,
}

impl GaussianKde {
    pub fn new(samples: &[i64], bw_adjust: f64) -> GaussianKde {
        let samples: Vec<f64> = samples.iter().map(|&v| v as f64).collect();
        let scott = stats::std_deviation(&samples).unwrap_or(0.0)
            * (samples.len().max(1) as f64).powf(-0.2);
        GaussianKde {
            samples,
            bandwidth: (scott * bw_adjust).max(MIN_BANDWIDTH),
        }
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Density estimate at a single point. Zero everywhere for an
    /// empty sample sequence.
    pub fn density(&self, x: f64) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let norm = 1.0 / (self.samples.len() as f64 * self.bandwidth * (2.0 * PI).sqrt());
        self.samples
            .iter()
            .map(|&sample| {
                let z = (x - sample) / self.bandwidth;

                (-0.5 * z * z).exp()
            })
            .sum::<f64>()
            * norm
    }

    /// Range the rendered curve should cover: the data range padded by
    /// [`SUPPORT_PAD`] bandwidths on each side, so the tails fall off
    /// to roughly zero inside the chart.
    pub fn support(&self) -> (f64, f64) {
        let mut lo = f64::MAX;
        let mut hi = f64::MIN;
        for &sample in &self.samples {
            lo = lo.min(sample);
            hi = hi.max(sample);
        }
        if lo > hi {
            return (0.0, 0.0);
        }
        let pad = SUPPORT_PAD * self.bandwidth;
        (lo - pad, hi + pad)
    }

    /// Evaluates the estimate on an evenly spaced grid over [`support`].
    pub fn curve(&self, points: usize) -> Vec<(f64, f64)> {
        let (lo, hi) = self.support();
        let step = (hi - lo) / (points.max(2) - 1) as f64;
        (0..points.max(2))
            .map(|i| {
                let x = lo + i as f64 * step;
                (x, self.density(x))
            })
            .collect()
    }
}
