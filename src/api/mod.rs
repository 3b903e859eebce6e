//! HTTP API for the Work-Time Computation Engine.
//!
//! This module provides the axum router, request/response types, and
//! application state for the `/stats` endpoint.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ClockEventRequest, PeriodRequest, StatsRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
