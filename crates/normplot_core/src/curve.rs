//! Sampled density curves.
//!
//! A [`CurveSpec`] names a closed domain, a sample count, and the normal
//! parameters; sampling it yields a [`DensityCurve`] holding the aligned
//! domain and density sequences the renderer draws.

use crate::density::Normal;
use crate::error::CurveError;

/// Linearly spaced samples over the closed interval `[lower, upper]`,
/// inclusive of both endpoints.
///
/// Spacing is `(upper - lower) / (count - 1)`; at least 2 samples are
/// required so both endpoints exist.
pub fn linspace(lower: f64, upper: f64, count: usize) -> Result<Vec<f64>, CurveError> {
    if count < 2 || !lower.is_finite() || !upper.is_finite() || lower >= upper {
        return Err(CurveError::InvalidDomain {
            lower,
            upper,
            count,
        });
    }

    let step = (upper - lower) / (count - 1) as f64;
    let mut samples = Vec::with_capacity(count);
    for i in 0..count - 1 {
        samples.push(lower + i as f64 * step);
    }
    // Land exactly on the upper bound instead of accumulating rounding error
    samples.push(upper);
    Ok(samples)
}

/// Parameters of a sampled density curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSpec {
    /// Lower bound of the sampled domain (inclusive)
    pub lower: f64,
    /// Upper bound of the sampled domain (inclusive)
    pub upper: f64,
    /// Number of evenly spaced samples across the domain
    pub count: usize,
    /// Mean of the normal distribution
    pub mean: f64,
    /// Standard deviation of the normal distribution
    pub std_dev: f64,
}

impl Default for CurveSpec {
    /// 1000 samples of the standard normal over [-4, 4].
    fn default() -> Self {
        Self {
            lower: -4.0,
            upper: 4.0,
            count: 1000,
            mean: 0.0,
            std_dev: 1.0,
        }
    }
}

impl CurveSpec {
    /// Sample the density over the domain.
    pub fn sample(&self) -> Result<DensityCurve, CurveError> {
        let normal = Normal::new(self.mean, self.std_dev)?;
        let xs = linspace(self.lower, self.upper, self.count)?;
        let ys = xs.iter().map(|&x| normal.pdf(x)).collect();
        Ok(DensityCurve {
            spec: *self,
            xs,
            ys,
        })
    }
}

/// A sampled density curve: aligned domain and density sequences.
///
/// Both sequences are the same length and positionally aligned; `xs` is
/// strictly increasing. Curves are immutable once sampled.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityCurve {
    spec: CurveSpec,
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl DensityCurve {
    /// The spec this curve was sampled from.
    #[must_use]
    pub fn spec(&self) -> &CurveSpec {
        &self.spec
    }

    /// Domain samples, strictly increasing.
    #[must_use]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Density samples, aligned with [`Self::xs`].
    #[must_use]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// The aligned `(x, density)` pairs, in domain order.
    #[must_use]
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.xs
            .iter()
            .zip(self.ys.iter())
            .map(|(&x, &y)| (x, y))
            .collect()
    }

    /// Largest density value in the curve.
    #[must_use]
    pub fn max_density(&self) -> f64 {
        self.ys.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// The `(x, density)` pair where the density peaks.
    #[must_use]
    pub fn peak(&self) -> (f64, f64) {
        // xs is never empty: linspace requires count >= 2
        let mut best = (self.xs[0], self.ys[0]);
        for (&x, &y) in self.xs.iter().zip(self.ys.iter()).skip(1) {
            if y > best.1 {
                best = (x, y);
            }
        }
        best
    }

    /// Trapezoidal-rule integral of the density over the sampled domain.
    ///
    /// For the default spec this is ≈ 1.0: more than 99.99% of the standard
    /// normal's mass lies inside [-4, 4].
    #[must_use]
    pub fn trapezoid_area(&self) -> f64 {
        self.xs
            .windows(2)
            .zip(self.ys.windows(2))
            .map(|(x, y)| (x[1] - x[0]) * (y[0] + y[1]) / 2.0)
            .sum()
    }
}
