use std::fmt;

/// Errors from curve construction
#[derive(Debug, Clone, PartialEq)]
pub enum CurveError {
    /// The domain cannot be sampled: the bounds are not an increasing finite
    /// interval, or the sample count is too small to span a closed interval
    InvalidDomain {
        lower: f64,
        upper: f64,
        count: usize,
    },
    /// The distribution parameters are unusable (standard deviation must be
    /// finite and positive, mean must be finite)
    InvalidParameters { mean: f64, std_dev: f64 },
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveError::InvalidDomain {
                lower,
                upper,
                count,
            } => {
                write!(
                    f,
                    "cannot sample {count} points over [{lower}, {upper}]: need a finite \
                     increasing interval and at least 2 samples"
                )
            }
            CurveError::InvalidParameters { mean, std_dev } => {
                write!(
                    f,
                    "invalid normal parameters (mean={mean}, std_dev={std_dev}): standard \
                     deviation must be finite and positive"
                )
            }
        }
    }
}

impl std::error::Error for CurveError {}
