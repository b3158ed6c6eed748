//! Application state for the overtime engine API.

use std::sync::Arc;

use crate::calculation::PayrollCalculator;

/// Shared application state.
///
/// Holds the calculator, which owns the immutable deployment configuration
/// and holiday source shared by every request.
#[derive(Clone)]
pub struct AppState {
    calculator: Arc<PayrollCalculator>,
}

impl AppState {
    /// Creates a new application state around `calculator`.
    pub fn new(calculator: PayrollCalculator) -> Self {
        Self {
            calculator: Arc::new(calculator),
        }
    }

    /// Returns the calculator.
    pub fn calculator(&self) -> &PayrollCalculator {
        &self.calculator
    }
}
