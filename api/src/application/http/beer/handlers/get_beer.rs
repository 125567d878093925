use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use brewdex_core::domain::beer::{entities::Beer, ports::BeerService};

#[utoipa::path(
    get,
    path = "/{beer_id}",
    tag = "beer",
    summary = "Get beer",
    params(
        ("beer_id" = i32, Path, description = "Beer ID"),
    ),
    responses(
        (status = 200, body = Beer),
        (status = 404, description = "Beer not found")
    ),
)]
pub async fn get_beer(
    Path(beer_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Response<Beer>, ApiError> {
    let beer = state
        .service
        .get_beer(beer_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(beer))
}
