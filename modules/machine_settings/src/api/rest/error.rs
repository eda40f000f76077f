//! HTTP error mapping to RFC-9457 Problem Details

use super::dto::{SettingsRejectedResponse, ValidationErrorDto};
use crate::contract::MachineSettingsError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// RFC-9457 Problem Details for HTTP API errors
#[derive(Debug, Serialize)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// A URI reference that identifies the specific occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl Problem {
    /// Create a new Problem Details response
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
        }
    }

    /// Add detail message
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Add instance URI
    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Error returned by handlers: a problem, or the validation rejection body
#[derive(Debug)]
pub enum ApiError {
    Problem(Problem),
    Rejected(SettingsRejectedResponse),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Problem(problem) => problem.into_response(),
            Self::Rejected(body) => (StatusCode::BAD_REQUEST, Json(body)).into_response(),
        }
    }
}

impl From<MachineSettingsError> for ApiError {
    fn from(error: MachineSettingsError) -> Self {
        map_domain_error(error)
    }
}

/// Map domain errors to HTTP responses: the rejection body for validation
/// failures, Problem Details for everything else
pub fn map_domain_error(error: MachineSettingsError) -> ApiError {
    let problem = match error {
        MachineSettingsError::Validation { errors } => {
            return ApiError::Rejected(SettingsRejectedResponse {
                error: "Settings validation failed".to_string(),
                errors: errors.into_iter().map(ValidationErrorDto::from).collect(),
            });
        }

        MachineSettingsError::MachineNotFound { name } => {
            Problem::new(StatusCode::NOT_FOUND, "Machine Not Found")
                .with_detail(format!("Machine '{}' not found", name))
                .with_instance(format!("/machines/{}", name))
        }

        MachineSettingsError::UnknownMachineType { machine_type } => Problem::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Unknown Machine Type",
        )
        .with_detail(format!("Machine type {} not found", machine_type)),

        MachineSettingsError::InvalidUnit { unit } => {
            Problem::new(StatusCode::BAD_REQUEST, "Invalid Unit Of Measure")
                .with_detail(format!("Invalid unit of measure: {}", unit))
        }

        MachineSettingsError::Internal => Problem::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
        )
        .with_detail("An unexpected error occurred"),
    };
    ApiError::Problem(problem)
}
