//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Machine DTOs =====

/// Registered machine
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MachineDto {
    /// Machine name
    #[schema(example = "molder_1")]
    pub name: String,

    /// Machine type
    #[serde(rename = "type")]
    #[schema(example = "InjectionMolder")]
    pub machine_type: String,
}

/// List of machines
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MachinesListResponse {
    pub machines: Vec<MachineDto>,
}

// ===== Setting definition DTOs =====

/// Setting definition as exposed to clients
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingDefinitionDto {
    /// Descriptive grouping
    #[schema(example = "process")]
    pub namespace: Option<String>,

    #[schema(example = "barrelTemperature")]
    pub identifier: String,

    pub description: String,

    /// One of "string", "number", "boolean"
    #[serde(rename = "type")]
    #[schema(example = "number")]
    pub data_type: String,

    pub nullable: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,

    /// Canonical unit symbol (numeric settings only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "°C")]
    pub uom: Option<String>,

    /// Inclusive lower bound, in `uom`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,

    /// Inclusive upper bound, in `uom`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
}

/// Setting definitions of one machine
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MachineSettingsResponse {
    pub machine: String,
    pub settings: Vec<SettingDefinitionDto>,
}

// ===== Proposal DTOs =====

/// One proposed setting value
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProposedValueDto {
    #[schema(example = "barrelTemperature")]
    pub identifier: String,

    /// String, number, boolean or null
    #[serde(default)]
    pub value: Option<serde_json::Value>,

    /// Unit symbol the value is expressed in
    #[serde(default, alias = "unitOfMeasure")]
    #[schema(example = "°F")]
    pub uom: Option<String>,
}

/// Apply (or verify) settings request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ApplySettingsRequest {
    pub settings: Vec<ProposedValueDto>,
}

/// Settings were accepted and applied
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplySettingsResponse {
    pub message: String,
    pub machine: String,
    pub applied_at: chrono::DateTime<chrono::Utc>,
}

/// Result of a dry-run validation
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VerifySettingsResponse {
    pub machine: String,
    pub valid: bool,
    pub errors: Vec<ValidationErrorDto>,
}

// ===== Validation error DTOs =====

/// One validation finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDto {
    pub identifier: String,
    #[schema(example = "Value must be <= 100")]
    pub message: String,
}

/// Body of a rejected apply request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SettingsRejectedResponse {
    #[schema(example = "Settings validation failed")]
    pub error: String,
    pub errors: Vec<ValidationErrorDto>,
}

// Note: Conversion implementations live in mapper.rs
