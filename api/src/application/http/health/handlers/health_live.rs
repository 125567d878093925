use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use brewdex_core::domain::health::ports::HealthCheckService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LivenessResponse {
    pub status: String,
    pub database_ping_ms: u64,
}

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = LivenessResponse),
        (status = 503, description = "Database unreachable")
    ),
)]
pub async fn health_live(
    State(state): State<AppState>,
) -> Result<Response<LivenessResponse>, ApiError> {
    let database_ping_ms = state
        .service
        .health()
        .await
        .map_err(|_| ApiError::ServiceUnavailable("Database is unreachable".to_string()))?;

    Ok(Response::OK(LivenessResponse {
        status: "UP".to_string(),
        database_ping_ms,
    }))
}
