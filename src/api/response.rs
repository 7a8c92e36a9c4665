//! Response types for the Attendance Engine API.
//!
//! This module defines the JSON bodies returned by the handlers and the
//! mapping from [`EngineError`] to HTTP error responses.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{
    AttendanceReport, AttendanceSummary, AuditTrace, ClockEvent, ClockKind, DayRecord,
    MonthPeriod,
};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::EmployeeNotFound { employee_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "EMPLOYEE_NOT_FOUND",
                    format!("Employee not found: {}", employee_id),
                    "No profile exists for the requested employee",
                ),
            },
            EngineError::InvalidPeriod { year, month } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid period: {}-{:02}", year, month),
                    "year must be positive and month must be between 1 and 12",
                ),
            },
            EngineError::StoreFailure { operation, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORE_FAILURE",
                    format!("Store failure during {}", operation),
                    message,
                ),
            },
        }
    }
}

/// Body returned by the clock-in and clock-out endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockResponse {
    /// Confirmation message, e.g. `"Success clock in."`.
    pub message: String,
    /// The stored record after the update.
    pub event: ClockEvent,
}

impl ClockResponse {
    /// Builds the confirmation for a clock action.
    pub fn new(kind: ClockKind, event: ClockEvent) -> Self {
        Self {
            message: format!("Success {}.", kind),
            event,
        }
    }
}

/// A reconciled day with its clock times rendered in the local offset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayView {
    /// The reconciled day.
    #[serde(flatten)]
    pub record: DayRecord,
    /// Local clock-in time as `HH:MM:SS`.
    pub clock_in_time: Option<String>,
    /// Local clock-out time as `HH:MM:SS`.
    pub clock_out_time: Option<String>,
}

fn local_time(at: Option<DateTime<Utc>>, offset: FixedOffset) -> Option<String> {
    at.map(|t| t.with_timezone(&offset).format("%H:%M:%S").to_string())
}

/// Body returned by the attendance endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceResponse {
    /// Unique identifier of the report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Engine version that produced the report.
    pub engine_version: String,
    /// The employee the report is for.
    pub employee_id: String,
    /// The month covered.
    pub period: MonthPeriod,
    /// Rate label, e.g. `"77%"`.
    pub attendance_rate: String,
    /// One entry per calendar day.
    pub days: Vec<DayView>,
    /// Aggregated attendance and salary.
    pub summary: AttendanceSummary,
    /// Audit trace of the calculation.
    pub audit_trace: AuditTrace,
}

impl AttendanceResponse {
    /// Renders a report for display in the given offset.
    pub fn from_report(report: AttendanceReport, offset: FixedOffset) -> Self {
        let days = report
            .days
            .into_iter()
            .map(|record| DayView {
                clock_in_time: local_time(record.clock_in, offset),
                clock_out_time: local_time(record.clock_out, offset),
                record,
            })
            .collect();

        Self {
            report_id: report.report_id,
            generated_at: report.generated_at,
            engine_version: report.engine_version,
            employee_id: report.employee_id,
            period: report.period,
            attendance_rate: report.summary.rate_label(),
            days,
            summary: report.summary,
            audit_trace: report.audit_trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayStatus;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_employee_not_found_maps_to_404() {
        let api_error: ApiErrorResponse = EngineError::EmployeeNotFound {
            employee_id: "emp_404".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "EMPLOYEE_NOT_FOUND");
        assert!(api_error.error.message.contains("emp_404"));
    }

    #[test]
    fn test_invalid_period_maps_to_400() {
        let api_error: ApiErrorResponse = EngineError::InvalidPeriod {
            year: 2026,
            month: 13,
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_store_failure_maps_to_500() {
        let api_error: ApiErrorResponse = EngineError::StoreFailure {
            operation: "upsert_event".to_string(),
            message: "lock poisoned".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "STORE_FAILURE");
    }

    #[tokio::test]
    async fn test_error_response_renders_json_body() {
        let response = ApiErrorResponse::from(EngineError::EmployeeNotFound {
            employee_id: "emp_404".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "EMPLOYEE_NOT_FOUND");
        assert_eq!(
            error.details.as_deref(),
            Some("No profile exists for the requested employee")
        );
    }

    #[test]
    fn test_clock_response_messages() {
        let event = ClockEvent::new("emp_001", NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        assert_eq!(
            ClockResponse::new(ClockKind::In, event.clone()).message,
            "Success clock in."
        );
        assert_eq!(
            ClockResponse::new(ClockKind::Out, event).message,
            "Success clock out."
        );
    }

    #[test]
    fn test_local_time_uses_offset() {
        let offset = FixedOffset::east_opt(7 * 3600).unwrap();
        let at = Utc.with_ymd_and_hms(2026, 10, 16, 1, 5, 9).unwrap();
        assert_eq!(local_time(Some(at), offset), Some("08:05:09".to_string()));
        assert_eq!(local_time(None, offset), None);
    }

    #[test]
    fn test_day_view_flattens_record() {
        let view = DayView {
            record: DayRecord {
                date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
                weekday_index: 5,
                clock_in: None,
                clock_out: None,
                status: DayStatus::Absent,
            },
            clock_in_time: None,
            clock_out_time: None,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["date"], "2026-10-16");
        assert_eq!(json["weekday_index"], 5);
        assert!(json["clock_in_time"].is_null());
    }
}
