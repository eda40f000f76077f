//! HTTP request handlers - thin layer that delegates to domain service

use crate::domain::Service;
use super::{dto::*, error::ApiError, mapper::proposals_from_request};
use axum::{extract::Path, Json};
use std::sync::Arc;

// ===== Machine Handlers =====

/// List all machines
pub async fn list_machines(service: Arc<Service>) -> Json<MachinesListResponse> {
    let machines = service
        .list_machines()
        .into_iter()
        .map(MachineDto::from)
        .collect();

    Json(MachinesListResponse { machines })
}

// ===== Settings Handlers =====

/// Get the setting definitions of a machine
pub async fn get_machine_settings(
    service: Arc<Service>,
    Path(name): Path<String>,
) -> Result<Json<MachineSettingsResponse>, ApiError> {
    let settings = service
        .get_settings(&name)?
        .into_iter()
        .map(SettingDefinitionDto::from)
        .collect();

    Ok(Json(MachineSettingsResponse {
        machine: name,
        settings,
    }))
}

/// Validate and apply settings to a machine
pub async fn apply_machine_settings(
    service: Arc<Service>,
    Path(name): Path<String>,
    Json(req): Json<ApplySettingsRequest>,
) -> Result<Json<ApplySettingsResponse>, ApiError> {
    let proposals = proposals_from_request(req)?;
    tracing::debug!(machine = %name, count = proposals.len(), "Apply settings request");

    service.apply_settings(&name, &proposals).await?;

    Ok(Json(ApplySettingsResponse {
        message: format!("Settings applied successfully to machine '{}'", name),
        machine: name,
        applied_at: chrono::Utc::now(),
    }))
}

/// Validate settings without applying them
pub async fn verify_machine_settings(
    service: Arc<Service>,
    Path(name): Path<String>,
    Json(req): Json<ApplySettingsRequest>,
) -> Result<Json<VerifySettingsResponse>, ApiError> {
    let proposals = proposals_from_request(req)?;

    let errors: Vec<ValidationErrorDto> = service
        .verify_settings(&name, &proposals)?
        .into_iter()
        .map(ValidationErrorDto::from)
        .collect();

    Ok(Json(VerifySettingsResponse {
        machine: name,
        valid: errors.is_empty(),
        errors,
    }))
}
