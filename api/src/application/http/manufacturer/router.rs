use super::handlers::{
    create_manufacturer::{__path_create_manufacturer, create_manufacturer},
    delete_manufacturer::{__path_delete_manufacturer, delete_manufacturer},
    get_manufacturer::{__path_get_manufacturer, get_manufacturer},
    get_manufacturers::{__path_get_manufacturers, get_manufacturers},
    update_manufacturer::{__path_update_manufacturer, update_manufacturer},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_manufacturers,
    get_manufacturer,
    create_manufacturer,
    update_manufacturer,
    delete_manufacturer
))]
pub struct ManufacturerApiDoc;

pub fn manufacturer_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/manufacturers", state.args.server.root_path),
            get(get_manufacturers).post(create_manufacturer),
        )
        .route(
            &format!(
                "{}/manufacturers/{{manufacturer_id}}",
                state.args.server.root_path
            ),
            get(get_manufacturer)
                .put(update_manufacturer)
                .delete(delete_manufacturer),
        )
}
