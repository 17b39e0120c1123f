//! Terminal viewer for the standard normal probability density curve.
//!
//! Samples the curve once at startup via `normplot_core`, then renders it as
//! a labeled line chart with a background grid and blocks until the user
//! dismisses it.

pub mod app;
pub mod components;
pub mod logging;
pub mod state;

pub use app::App;
pub use logging::init_logging;
pub use state::AppState;
