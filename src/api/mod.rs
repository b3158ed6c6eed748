//! HTTP API module for the overtime engine.
//!
//! This module provides the REST endpoints for pricing overtime entries
//! and listing the public holidays the engine knows about.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, EntryRequest};
pub use response::{ApiError, CalculationResponse, HolidaysResponse};
pub use state::AppState;
