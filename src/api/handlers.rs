//! HTTP request handlers for the hiring simulation API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::simulation::{Rng, run_simulation, transition};

use super::request::{SimulationRequest, TransitionRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz_handler))
        .route("/simulate", post(simulate_handler))
        .route("/transition", post(transition_handler))
        .with_state(state)
}

/// Handler for GET /healthz.
async fn healthz_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// Handler for POST /simulate endpoint.
///
/// Applies the request's overrides to the loaded model and runs the simulation.
async fn simulate_handler(
    State(state): State<AppState>,
    payload: Result<Json<SimulationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing simulation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let config = match request.apply(state.config().config()) {
        Ok(config) => config,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid simulation request");
            return error_response(err.into());
        }
    };

    let result = match tokio::task::spawn_blocking(move || run_simulation(&config)).await {
        Ok(result) => result,
        Err(join_error) => {
            error!(correlation_id = %correlation_id, error = %join_error, "Simulation task failed");
            return json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &ApiError::new("INTERNAL_ERROR", "Simulation task failed"),
            );
        }
    };

    match result {
        Ok(result) => {
            let last = result.periods.last();
            info!(
                correlation_id = %correlation_id,
                simulation_id = %result.simulation_id,
                runs = result.runs,
                final_headcount = last.map(|s| s.headcount).unwrap_or(0),
                duration_us = result.duration_us,
                "Simulation completed successfully"
            );
            json_response(StatusCode::OK, &result)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Simulation failed");
            error_response(err.into())
        }
    }
}

/// Handler for POST /transition endpoint.
///
/// Validates the submitted record and advances it one period.
async fn transition_handler(
    State(state): State<AppState>,
    payload: Result<Json<TransitionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    if let Err(err) = request.employee.validate() {
        warn!(correlation_id = %correlation_id, error = %err, "Invalid employee record");
        return error_response(err.into());
    }

    let config = state.config();
    let seed = request.seed.unwrap_or(config.simulation().seed);
    let mut rng = Rng::new(seed);

    match transition(&request.employee, &mut rng, config.tiers()) {
        Ok(outcome) => {
            info!(
                correlation_id = %correlation_id,
                seed,
                from = %request.employee.performance(),
                vacancy = outcome.is_vacancy(),
                "Transition applied"
            );
            json_response(StatusCode::OK, &outcome)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Transition failed");
            error_response(err.into())
        }
    }
}

/// Maps a JSON extraction failure onto a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, &error)
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, &api_error.error)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: &T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}
