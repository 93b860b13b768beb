//! HTTP API module for the estimation engine.
//!
//! This module provides the REST endpoints: `POST /calculate` for a
//! severance and unemployment benefit estimate, and `GET /rules` for the
//! statutory figures the estimates are built from.

mod handlers;
mod request;
mod response;
mod sanitize;
mod state;

pub use handlers::{create_router, perform_calculation};
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse, RulesResponse};
pub use sanitize::{SanitizedRequest, sanitize_request};
pub use state::AppState;
