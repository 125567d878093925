use crate::application::http::beer::validators::BeerValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use brewdex_core::domain::beer::{entities::Beer, ports::BeerService};

#[utoipa::path(
    put,
    path = "/{beer_id}",
    tag = "beer",
    summary = "Update beer",
    description = "Overwrites the beer's attributes. The manufacturer changes only when `manufacturerDetails.id` is given.",
    params(
        ("beer_id" = i32, Path, description = "Beer ID"),
    ),
    request_body = BeerValidator,
    responses(
        (status = 200, body = Beer),
        (status = 404, description = "Beer not found")
    ),
)]
pub async fn update_beer(
    Path(beer_id): Path<i32>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<BeerValidator>,
) -> Result<Response<Beer>, ApiError> {
    let beer = state
        .service
        .update_beer(payload.into_update_input(beer_id))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(beer))
}
