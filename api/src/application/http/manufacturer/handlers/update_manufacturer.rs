use crate::application::http::manufacturer::validators::ManufacturerValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use brewdex_core::domain::manufacturer::{
    entities::Manufacturer, ports::ManufacturerService, value_objects::UpdateManufacturerInput,
};

#[utoipa::path(
    put,
    path = "/{manufacturer_id}",
    tag = "manufacturer",
    summary = "Update manufacturer",
    params(
        ("manufacturer_id" = i32, Path, description = "Manufacturer ID"),
    ),
    request_body = ManufacturerValidator,
    responses(
        (status = 200, body = Manufacturer),
        (status = 404, description = "Manufacturer not found")
    ),
)]
pub async fn update_manufacturer(
    Path(manufacturer_id): Path<i32>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ManufacturerValidator>,
) -> Result<Response<Manufacturer>, ApiError> {
    let manufacturer = state
        .service
        .update_manufacturer(UpdateManufacturerInput {
            manufacturer_id,
            name: payload.name,
            country: payload.country,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(manufacturer))
}
