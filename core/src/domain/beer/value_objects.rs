use crate::domain::beer::entities::BeerType;

/// Criteria for `POST /beers/search`. Every filter is optional; paging and
/// sorting fall back to page 0, size 10, `name` ascending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchBeersInput {
    pub name: Option<String>,
    pub beer_type: Option<BeerType>,
    pub min_abv: Option<f64>,
    pub max_abv: Option<f64>,
    pub manufacturer_name: Option<String>,
    pub page: Option<u64>,
    pub size: Option<u64>,
    pub sort_by: Option<String>,
    pub direction: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateBeerInput {
    pub name: String,
    pub alcohol_by_volume: Option<f64>,
    pub beer_type: BeerType,
    pub description: Option<String>,
    pub manufacturer_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBeerInput {
    pub beer_id: i32,
    pub name: String,
    pub alcohol_by_volume: Option<f64>,
    pub beer_type: BeerType,
    pub description: Option<String>,
    pub manufacturer_id: Option<i32>,
}

/// Row to persist; the manufacturer has already been resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBeer {
    pub name: String,
    pub alcohol_by_volume: Option<f64>,
    pub beer_type: BeerType,
    pub description: Option<String>,
    pub manufacturer_id: i32,
}
