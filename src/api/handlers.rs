//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::delivery::RecordingNotifier;
use crate::payable::{process_payroll, StandardEmployeeFactory};

use super::request::PayrunRequest;
use super::response::{ApiError, ApiErrorResponse, PayrunResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payrun", post(payrun_handler))
        .with_state(state)
}

/// Handler for POST /payrun endpoint.
///
/// Pays the posted records and returns the run summary. Notices are
/// collected in memory and returned in the response body.
async fn payrun_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrunRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payrun request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
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
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let mut notifier = RecordingNotifier::new();
    match process_payroll(&request.records, &StandardEmployeeFactory, &mut notifier) {
        Ok(payrun) => {
            info!(
                correlation_id = %correlation_id,
                run_id = %payrun.run_id,
                records = request.records.len(),
                gross_pay = %payrun.totals.gross_pay,
                duration_us = payrun.duration_us,
                "Payrun completed successfully"
            );
            let metadata = state.config().metadata();
            json_response(
                StatusCode::OK,
                PayrunResponse {
                    organisation: metadata.organisation.clone(),
                    currency: metadata.currency.clone(),
                    payrun,
                },
            )
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                delivered = notifier.notices().len(),
                "Payrun failed"
            );
            let api_error: ApiErrorResponse = err.into();
            json_response(api_error.status, api_error.error)
        }
    }
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
