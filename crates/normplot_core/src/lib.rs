//! Normal density curve math
//!
//! Pure numerics behind the normplot viewer:
//! - Linearly spaced domain sampling over a closed interval
//! - The closed-form normal probability density
//! - Sampled curves with numeric helpers (trapezoidal area, peak lookup)
//!
//! No I/O and no display types live here; the `normplot` crate owns those.

pub mod curve;
pub mod density;
pub mod error;

pub use curve::{CurveSpec, DensityCurve, linspace};
pub use density::Normal;
pub use error::CurveError;
