use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use brewdex_core::domain::beer::{
    entities::Beer,
    ports::BeerService,
    sort::{DEFAULT_SORT_DIRECTION, DEFAULT_SORT_FIELD},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(rename_all = "camelCase", parameter_in = Query)]
pub struct GetBeersQuery {
    /// One of `name`, `abv`, `type`, `manufacturer` or the matching attribute name.
    pub sort_by: Option<String>,
    /// `asc` or `desc`; anything else sorts ascending.
    pub direction: Option<String>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "beer",
    summary = "Get all beers",
    description = "Lists every beer ordered by the requested field.",
    params(GetBeersQuery),
    responses(
        (status = 200, body = Vec<Beer>),
        (status = 400, description = "Unknown sort field")
    ),
)]
pub async fn get_beers(
    Query(query): Query<GetBeersQuery>,
    State(state): State<AppState>,
) -> Result<Response<Vec<Beer>>, ApiError> {
    let beers = state
        .service
        .get_beers(
            query.sort_by.unwrap_or_else(|| DEFAULT_SORT_FIELD.to_string()),
            query
                .direction
                .unwrap_or_else(|| DEFAULT_SORT_DIRECTION.to_string()),
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(beers))
}
