use super::handlers::{
    create_beer::{__path_create_beer, create_beer},
    delete_beer::{__path_delete_beer, delete_beer},
    get_beer::{__path_get_beer, get_beer},
    get_beers::{__path_get_beers, get_beers},
    search_beers::{__path_search_beers, search_beers},
    update_beer::{__path_update_beer, update_beer},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_beers,
    search_beers,
    get_beer,
    create_beer,
    update_beer,
    delete_beer
))]
pub struct BeerApiDoc;

pub fn beer_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/beers", state.args.server.root_path),
            get(get_beers).post(create_beer),
        )
        .route(
            &format!("{}/beers/search", state.args.server.root_path),
            post(search_beers),
        )
        .route(
            &format!("{}/beers/{{beer_id}}", state.args.server.root_path),
            get(get_beer).put(update_beer).delete(delete_beer),
        )
}
