//! HTTP API module for the payroll dispatch engine.
//!
//! This module exposes the payrun over a REST endpoint.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::PayrunRequest;
pub use response::{ApiError, PayrunResponse};
pub use state::AppState;
