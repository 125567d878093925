use crate::application::http::beer::validators::BeerValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use brewdex_core::domain::beer::{entities::Beer, ports::BeerService};

#[utoipa::path(
    post,
    path = "",
    tag = "beer",
    summary = "Create beer",
    description = "Creates a beer for an existing manufacturer referenced by `manufacturerDetails.id`.",
    request_body = BeerValidator,
    responses(
        (status = 201, body = Beer),
        (status = 400, description = "Invalid body or missing manufacturer id"),
        (status = 500, description = "Manufacturer could not be associated")
    ),
)]
pub async fn create_beer(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<BeerValidator>,
) -> Result<Response<Beer>, ApiError> {
    let beer = state
        .service
        .create_beer(payload.into_create_input())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(beer))
}
