//! Chart components for the density viewer.

mod density;

pub use density::DensityChart;
