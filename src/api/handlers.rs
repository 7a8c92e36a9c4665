//! HTTP request handlers for the Attendance Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::ClockKind;

use super::request::AttendanceQuery;
use super::response::{ApiError, ApiErrorResponse, AttendanceResponse, ClockResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(list_employees_handler))
        .route("/employees/:id/attendance", get(attendance_handler))
        .route("/employees/:id/clock-in", post(clock_in_handler))
        .route("/employees/:id/clock-out", post(clock_out_handler))
        .with_state(state)
}

fn json_ok<T: serde::Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(err: EngineError) -> Response {
    ApiErrorResponse::from(err).into_response()
}

/// Handler for GET /employees.
///
/// Lists every employee with their attendance rate and prorated salary for
/// the current month.
async fn list_employees_handler(State(state): State<AppState>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing employee overview request");

    match state.service().employee_overview(state.now()).await {
        Ok(rows) => {
            info!(
                correlation_id = %correlation_id,
                employees = rows.len(),
                "Employee overview completed"
            );
            json_ok(rows)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Employee overview failed");
            error_response(err)
        }
    }
}

/// Handler for GET /employees/:id/attendance.
///
/// Returns the reconciled month; defaults to the current month when the
/// query omits `year` or `month`.
async fn attendance_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    query: Result<Query<AttendanceQuery>, QueryRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        "Processing attendance request"
    );

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection,
                "Invalid attendance query"
            );
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(rejection.body_text()),
            }
            .into_response();
        }
    };

    let now = state.now();
    let service = state.service();
    let period = match query.resolve(service.config().local_date(now)) {
        Ok(period) => period,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid period requested");
            return error_response(err);
        }
    };

    match service.monthly_report(&employee_id, period, now).await {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                year = period.year(),
                month = period.month(),
                rate = report.summary.rate,
                duration_us = report.audit_trace.duration_us,
                "Attendance request completed"
            );
            json_ok(AttendanceResponse::from_report(
                report,
                service.config().utc_offset(),
            ))
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                error = %err,
                "Attendance request failed"
            );
            error_response(err)
        }
    }
}

/// Handler for POST /employees/:id/clock-in.
async fn clock_in_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> impl IntoResponse {
    clock(state, employee_id, ClockKind::In).await
}

/// Handler for POST /employees/:id/clock-out.
async fn clock_out_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> impl IntoResponse {
    clock(state, employee_id, ClockKind::Out).await
}

async fn clock(state: AppState, employee_id: String, kind: ClockKind) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        action = %kind,
        "Processing clock request"
    );

    let now = state.now();
    let result = match kind {
        ClockKind::In => state.service().clock_in(&employee_id, now).await,
        ClockKind::Out => state.service().clock_out(&employee_id, now).await,
    };

    match result {
        Ok(event) => json_ok(ClockResponse::new(kind, event)),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                error = %err,
                "Clock request failed"
            );
            error_response(err)
        }
    }
}
