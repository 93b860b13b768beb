//! HTTP request handlers for the estimation API.
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
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_benefit, calculate_net_benefit, calculate_severance, resolve_monthly_salary,
    resolve_tenure,
};
use crate::config::ConfigLoader;
use crate::models::{AuditTrace, CalculationResult, SeveranceInput};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, RulesResponse};
use super::sanitize::{SanitizedRequest, sanitize_request};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/calculate",
            post(calculate_handler).fallback(method_not_allowed_handler),
        )
        .route("/rules", get(rules_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculation request and returns the severance and benefit
/// estimate.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

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
                    ApiError::malformed_json(body_text)
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
                    warn!(correlation_id = %correlation_id, "Missing JSON content type");
                    ApiError::new(
                        "MISSING_CONTENT_TYPE",
                        "Content-Type must be application/json",
                    )
                }
                other => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %other,
                        "Failed to read request body"
                    );
                    ApiError::malformed_json("Failed to parse request body")
                }
            };
            return ApiErrorResponse::new(StatusCode::BAD_REQUEST, error).into_response();
        }
    };

    let config = state.config();
    let sanitized = match sanitize_request(&request, config.default_deductions()) {
        Ok(sanitized) => sanitized,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Request rejected during sanitisation"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    for warning in &sanitized.warnings {
        warn!(
            correlation_id = %correlation_id,
            code = %warning.code,
            "{}",
            warning.message
        );
    }

    let result = perform_calculation(&sanitized, config);
    info!(
        correlation_id = %correlation_id,
        termination_type = result.termination_type.code(),
        severance = %result.severance,
        benefit_entitled = result.benefit.has_entitlement(),
        benefit_days = result.benefit.duration_days,
        benefit_total = %result.benefit.total_estimated,
        warnings = result.audit_trace.warnings.len(),
        duration_us = result.audit_trace.duration_us,
        "Calculation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}

/// Handler for any method other than POST on /calculate.
async fn method_not_allowed_handler() -> Response {
    warn!("Rejected non-POST request to /calculate");
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        ApiErrorResponse::new(StatusCode::METHOD_NOT_ALLOWED, ApiError::method_not_allowed()),
    )
        .into_response()
}

/// Handler for GET /rules endpoint.
async fn rules_handler(State(state): State<AppState>) -> Json<RulesResponse> {
    Json(RulesResponse::new(state.config().calculator().clone()))
}

/// Runs every estimator over a sanitised request.
///
/// The severance and benefit estimators are independent; both always
/// produce a figure, so this never fails once the request is sanitised.
pub fn perform_calculation(request: &SanitizedRequest, config: &ConfigLoader) -> CalculationResult {
    let start_time = Instant::now();
    let mut steps = Vec::new();
    let mut step_number: u32 = 1;

    let salary = resolve_monthly_salary(&request.salary, step_number);
    steps.push(salary.audit_step);
    step_number += 1;

    let tenure = resolve_tenure(&request.tenure, step_number);
    steps.push(tenure.audit_step);
    step_number += 1;

    let severance = calculate_severance(
        &SeveranceInput {
            termination_type: request.termination_type,
            monthly_gross_salary: salary.monthly_gross_salary,
            tenure: tenure.total,
            pre_cutover_tenure: tenure.pre_cutover,
        },
        step_number,
    );
    steps.push(severance.audit_step);
    step_number += 1;

    let benefit = calculate_benefit(&request.benefit, step_number);
    step_number += benefit.audit_steps.len() as u32;
    steps.extend(benefit.audit_steps);

    let net_benefit = calculate_net_benefit(&benefit.result, &request.deductions, step_number);
    steps.push(net_benefit.audit_step);

    let duration_us = start_time.elapsed().as_micros() as u64;

    CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        termination_type: request.termination_type,
        unrecognised_termination_type: request.unrecognised_termination_type.clone(),
        severance: severance.result.amount,
        benefit: benefit.result,
        net_benefit: net_benefit.result,
        disclaimer: config.calculator().disclaimer.clone(),
        audit_trace: AuditTrace {
            steps,
            warnings: request.warnings.clone(),
            duration_us,
        },
    }
}
