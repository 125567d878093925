use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use brewdex_core::domain::beer::ports::BeerService;

#[utoipa::path(
    delete,
    path = "/{beer_id}",
    tag = "beer",
    summary = "Delete beer",
    params(
        ("beer_id" = i32, Path, description = "Beer ID"),
    ),
    responses(
        (status = 204, description = "Beer deleted"),
        (status = 404, description = "Beer not found")
    ),
)]
pub async fn delete_beer(
    Path(beer_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_beer(beer_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
