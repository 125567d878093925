use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::beer::entities::{BeerType, ManufacturerDetails};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Manufacturer {
    pub id: i32,
    pub name: String,
    pub country: String,
    pub beers: Vec<ManufacturerBeer>,
}

/// A beer as listed under its manufacturer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManufacturerBeer {
    pub id: i32,
    pub name: String,
    pub alcohol_by_volume: Option<f64>,
    pub beer_type: BeerType,
    pub description: Option<String>,
}

impl Manufacturer {
    pub fn update(&mut self, name: String, country: String) {
        self.name = name;
        self.country = country;
    }

    pub fn details(&self) -> ManufacturerDetails {
        ManufacturerDetails {
            id: self.id,
            name: self.name.clone(),
            country: self.country.clone(),
        }
    }
}
