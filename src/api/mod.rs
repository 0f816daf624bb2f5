//! HTTP API module for the hiring simulation.
//!
//! This module provides the REST endpoints for running simulations and
//! advancing single employee records.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{MAX_PERIODS, MAX_RUNS, OrganizationRequest, SimulationRequest, TransitionRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
