//! Route registration with OpenAPI documentation

use crate::domain::Service;
use super::{dto::*, error::ApiError, handlers};
use axum::{
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

/// OpenAPI document for the machine settings REST surface
#[derive(OpenApi)]
#[openapi(
    info(title = "Machine Settings API"),
    paths(
        list_machines_handler,
        get_machine_settings_handler,
        apply_machine_settings_handler,
        verify_machine_settings_handler,
    ),
    components(schemas(
        MachineDto,
        MachinesListResponse,
        SettingDefinitionDto,
        MachineSettingsResponse,
        ProposedValueDto,
        ApplySettingsRequest,
        ApplySettingsResponse,
        VerifySettingsResponse,
        ValidationErrorDto,
        SettingsRejectedResponse,
    ))
)]
pub struct ApiDoc;

/// Register all REST routes on `router`
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        .route("/health", get(health_handler))
        .route("/openapi.json", get(openapi_handler))
        .route("/machines", get(list_machines_handler))
        .route(
            "/machines/{name}/settings",
            get(get_machine_settings_handler).post(apply_machine_settings_handler),
        )
        .route(
            "/machines/{name}/settings/verify",
            post(verify_machine_settings_handler),
        )
        // Add service as extension for handlers
        .layer(Extension(service))
}

// ===== Handler wrappers that extract service from Extension =====

async fn health_handler() -> &'static str {
    "ok"
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[utoipa::path(
    get,
    path = "/machines",
    responses((status = 200, description = "Registered machines", body = MachinesListResponse))
)]
async fn list_machines_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Json<MachinesListResponse> {
    handlers::list_machines(service).await
}

#[utoipa::path(
    get,
    path = "/machines/{name}/settings",
    params(("name" = String, Path, description = "Machine name")),
    responses(
        (status = 200, description = "Setting definitions", body = MachineSettingsResponse),
        (status = 404, description = "Machine not found")
    )
)]
async fn get_machine_settings_handler(
    Extension(service): Extension<Arc<Service>>,
    path: axum::extract::Path<String>,
) -> Result<Json<MachineSettingsResponse>, ApiError> {
    handlers::get_machine_settings(service, path).await
}

#[utoipa::path(
    post,
    path = "/machines/{name}/settings",
    params(("name" = String, Path, description = "Machine name")),
    request_body = ApplySettingsRequest,
    responses(
        (status = 200, description = "Settings applied", body = ApplySettingsResponse),
        (status = 400, description = "Settings rejected", body = SettingsRejectedResponse),
        (status = 404, description = "Machine not found")
    )
)]
async fn apply_machine_settings_handler(
    Extension(service): Extension<Arc<Service>>,
    path: axum::extract::Path<String>,
    json: Json<ApplySettingsRequest>,
) -> Result<Json<ApplySettingsResponse>, ApiError> {
    handlers::apply_machine_settings(service, path, json).await
}

#[utoipa::path(
    post,
    path = "/machines/{name}/settings/verify",
    params(("name" = String, Path, description = "Machine name")),
    request_body = ApplySettingsRequest,
    responses(
        (status = 200, description = "Validation result", body = VerifySettingsResponse),
        (status = 404, description = "Machine not found")
    )
)]
async fn verify_machine_settings_handler(
    Extension(service): Extension<Arc<Service>>,
    path: axum::extract::Path<String>,
    json: Json<ApplySettingsRequest>,
) -> Result<Json<VerifySettingsResponse>, ApiError> {
    handlers::verify_machine_settings(service, path, json).await
}
