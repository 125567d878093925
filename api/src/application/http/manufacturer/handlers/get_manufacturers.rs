use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use brewdex_core::domain::manufacturer::{entities::Manufacturer, ports::ManufacturerService};

#[utoipa::path(
    get,
    path = "",
    tag = "manufacturer",
    summary = "Get all manufacturers",
    description = "Lists every manufacturer with the beers it produces.",
    responses(
        (status = 200, body = Vec<Manufacturer>)
    ),
)]
pub async fn get_manufacturers(
    State(state): State<AppState>,
) -> Result<Response<Vec<Manufacturer>>, ApiError> {
    let manufacturers = state
        .service
        .get_manufacturers()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(manufacturers))
}
