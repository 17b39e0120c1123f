//! Closed-form normal probability density.

use crate::error::CurveError;

/// A normal distribution described by its mean and standard deviation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    mean: f64,
    std_dev: f64,
}

impl Default for Normal {
    fn default() -> Self {
        Self::standard()
    }
}

impl Normal {
    /// The standard normal distribution (mean 0, standard deviation 1).
    #[must_use]
    pub fn standard() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }

    /// Create a distribution, rejecting parameters the density formula
    /// cannot handle.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, CurveError> {
        if !mean.is_finite() || !std_dev.is_finite() || std_dev <= 0.0 {
            return Err(CurveError::InvalidParameters { mean, std_dev });
        }
        Ok(Self { mean, std_dev })
    }

    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    #[must_use]
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Probability density at `x`:
    /// f(x) = (1 / (σ·√(2π))) · exp(−(x−μ)² / (2σ²))
    #[must_use]
    pub fn pdf(&self, x: f64) -> f64 {
        let pi = std::f64::consts::PI;
        let exponent = -(x - self.mean).powi(2) / (2.0 * self.std_dev * self.std_dev);
        (1.0 / (self.std_dev * (2.0 * pi).sqrt())) * exponent.exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_standard_pdf_at_zero() {
        // 1/√(2π) ≈ 0.3989422804
        let normal = Normal::standard();
        assert!((normal.pdf(0.0) - 0.398_942_280_4).abs() < TOL);
    }

    #[test]
    fn test_pdf_symmetric_about_mean() {
        let normal = Normal::standard();
        assert!((normal.pdf(-1.5) - normal.pdf(1.5)).abs() < TOL);
        assert!((normal.pdf(-4.0) - normal.pdf(4.0)).abs() < TOL);

        let shifted = Normal::new(2.0, 0.5).unwrap();
        assert!((shifted.pdf(1.0) - shifted.pdf(3.0)).abs() < TOL);
    }

    #[test]
    fn test_pdf_never_negative() {
        let normal = Normal::standard();
        for i in -100..=100 {
            assert!(normal.pdf(i as f64 / 10.0) >= 0.0);
        }
    }

    #[test]
    fn test_rejects_bad_std_dev() {
        assert!(matches!(
            Normal::new(0.0, 0.0),
            Err(CurveError::InvalidParameters { .. })
        ));
        assert!(matches!(
            Normal::new(0.0, -1.0),
            Err(CurveError::InvalidParameters { .. })
        ));
        assert!(matches!(
            Normal::new(0.0, f64::NAN),
            Err(CurveError::InvalidParameters { .. })
        ));
        assert!(matches!(
            Normal::new(f64::INFINITY, 1.0),
            Err(CurveError::InvalidParameters { .. })
        ));
    }
}
