use crate::application::http::beer::validators::SearchBeersValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use brewdex_core::domain::{
    beer::{entities::Beer, ports::BeerService},
    common::value_objects::Page,
};

#[utoipa::path(
    post,
    path = "/search",
    tag = "beer",
    summary = "Search beers",
    description = "Filters beers by name, type, alcohol range and manufacturer name. Results are sorted and paginated.",
    request_body = SearchBeersValidator,
    responses(
        (status = 200, body = Page<Beer>),
        (status = 400, description = "Unknown sort field or invalid page size")
    ),
)]
pub async fn search_beers(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SearchBeersValidator>,
) -> Result<Response<Page<Beer>>, ApiError> {
    let page = state
        .service
        .search_beers(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(page))
}
