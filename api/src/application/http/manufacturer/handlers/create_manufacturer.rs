use crate::application::http::manufacturer::validators::ManufacturerValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use brewdex_core::domain::manufacturer::{
    entities::Manufacturer, ports::ManufacturerService, value_objects::CreateManufacturerInput,
};

#[utoipa::path(
    post,
    path = "",
    tag = "manufacturer",
    summary = "Create manufacturer",
    request_body = ManufacturerValidator,
    responses(
        (status = 201, body = Manufacturer),
        (status = 400, description = "Invalid body")
    ),
)]
pub async fn create_manufacturer(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ManufacturerValidator>,
) -> Result<Response<Manufacturer>, ApiError> {
    let manufacturer = state
        .service
        .create_manufacturer(CreateManufacturerInput {
            name: payload.name,
            country: payload.country,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(manufacturer))
}
