//! HTTP request handlers for the Settlement Comparator API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Local, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compare_scenarios_audited;
use crate::export::{DocumentExporter, ShareLinkBuilder};
use crate::form::SettlementForm;
use crate::models::{AuditTrace, ComparisonReport, SettlementInput};

use super::request::ComparisonRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/compare", post(compare_handler))
        .route("/export/document", post(export_document_handler))
        .route("/share", post(share_handler))
        .with_state(state)
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Handler for POST /compare.
///
/// Returns the comparison wrapped in a [`ComparisonReport`].
async fn compare_handler(payload: Result<Json<ComparisonRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing comparison request");

    let input = match parse_input(payload, correlation_id) {
        Ok(input) => input,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let audited = compare_scenarios_audited(&input);
    let duration_us = start_time.elapsed().as_micros() as u64;

    info!(
        correlation_id = %correlation_id,
        reason = input.reason.tag(),
        full_years = audited.tenure.full_years,
        difference = %audited.result.difference,
        duration_us,
        "Comparison completed successfully"
    );

    let report = ComparisonReport {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        input,
        result: audited.result,
        audit_trace: AuditTrace {
            steps: audited.audit_steps,
            duration_us,
        },
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(report),
    )
        .into_response()
}

/// Handler for POST /export/document.
///
/// Returns the rendered calculation statement as a plain-text attachment.
async fn export_document_handler(
    State(state): State<AppState>,
    payload: Result<Json<ComparisonRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing document export request");

    let input = match parse_input(payload, correlation_id) {
        Ok(input) => input,
        Err(response) => return response,
    };

    let result = compare_scenarios_audited(&input).result;
    let document = DocumentExporter::new(state.config().export()).export(
        &input,
        &result,
        Local::now().naive_local(),
    );

    info!(
        correlation_id = %correlation_id,
        pages = document.page_count(),
        file_name = %document.file_name(),
        "Document exported"
    );

    let disposition = format!("attachment; filename=\"{}\"", document.file_name());
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document.render(),
    )
        .into_response()
}

/// Handler for POST /share.
async fn share_handler(
    State(state): State<AppState>,
    payload: Result<Json<ComparisonRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing share link request");

    let input = match parse_input(payload, correlation_id) {
        Ok(input) => input,
        Err(response) => return response,
    };

    let result = compare_scenarios_audited(&input).result;
    let link = ShareLinkBuilder::new(&state.config().export().share).build(&input, &result);

    info!(
        correlation_id = %correlation_id,
        url_len = link.url.len(),
        "Share link built"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(link),
    )
        .into_response()
}

/// Turns the request body into a validated input, or the error response to
/// send back.
fn parse_input(
    payload: Result<Json<ComparisonRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<SettlementInput, Response> {
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
            return Err((
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response());
        }
    };

    let form: SettlementForm = request.into();
    form.submit(Local::now().date_naive()).map_err(|err| {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Invalid settlement input"
        );
        let api_error: ApiErrorResponse = err.into();
        (
            api_error.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(api_error.error),
        )
            .into_response()
    })
}
