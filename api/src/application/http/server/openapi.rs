use crate::application::http::{
    beer::router::BeerApiDoc, health::router::HealthApiDoc,
    manufacturer::router::ManufacturerApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Brewdex API",
        description = "Beer and manufacturer catalog with filtered, sorted and paginated search."
    ),
    nest(
        (path = "/beers", api = BeerApiDoc),
        (path = "/manufacturers", api = ManufacturerApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
