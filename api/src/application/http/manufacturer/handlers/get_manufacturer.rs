use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use brewdex_core::domain::manufacturer::{entities::Manufacturer, ports::ManufacturerService};

#[utoipa::path(
    get,
    path = "/{manufacturer_id}",
    tag = "manufacturer",
    summary = "Get manufacturer",
    params(
        ("manufacturer_id" = i32, Path, description = "Manufacturer ID"),
    ),
    responses(
        (status = 200, body = Manufacturer),
        (status = 404, description = "Manufacturer not found")
    ),
)]
pub async fn get_manufacturer(
    Path(manufacturer_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Response<Manufacturer>, ApiError> {
    let manufacturer = state
        .service
        .get_manufacturer(manufacturer_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(manufacturer))
}
