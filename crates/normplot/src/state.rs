use normplot_core::DensityCurve;

/// Shared application state handed to every component.
pub struct AppState {
    /// The curve rendered by the chart, sampled once at startup
    pub curve: DensityCurve,
    /// Set when the user dismisses the display
    pub exit: bool,
}

impl AppState {
    pub fn new(curve: DensityCurve) -> Self {
        Self { curve, exit: false }
    }
}
