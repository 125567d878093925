use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use brewdex_core::domain::manufacturer::ports::ManufacturerService;

#[utoipa::path(
    delete,
    path = "/{manufacturer_id}",
    tag = "manufacturer",
    summary = "Delete manufacturer",
    description = "Deletes the manufacturer and every beer it produces.",
    params(
        ("manufacturer_id" = i32, Path, description = "Manufacturer ID"),
    ),
    responses(
        (status = 204, description = "Manufacturer deleted"),
        (status = 404, description = "Manufacturer not found")
    ),
)]
pub async fn delete_manufacturer(
    Path(manufacturer_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_manufacturer(manufacturer_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
