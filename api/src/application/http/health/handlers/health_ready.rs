use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use brewdex_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};
use tracing::warn;

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    responses(
        (status = 200, body = DatabaseHealthStatus),
        (status = 503, description = "Database is down")
    ),
)]
pub async fn health_ready(
    State(state): State<AppState>,
) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    let status = state
        .service
        .readiness()
        .await
        .map_err(ApiError::from)?;

    if !status.is_up() {
        warn!(response_time_ms = status.response_time_ms, "database is down");
        return Err(ApiError::ServiceUnavailable("Database is down".to_string()));
    }

    Ok(Response::OK(status))
}
