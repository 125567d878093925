use brewdex_core::domain::beer::{
    entities::BeerType,
    value_objects::{CreateBeerInput, SearchBeersInput, UpdateBeerInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Reference to the producing manufacturer; only the id is read.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ManufacturerReference {
    pub id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BeerValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(range(min = 0.0, message = "alcoholByVolume must not be negative"))]
    pub alcohol_by_volume: Option<f64>,

    pub beer_type: BeerType,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub manufacturer_details: Option<ManufacturerReference>,
}

impl BeerValidator {
    fn manufacturer_id(&self) -> Option<i32> {
        self.manufacturer_details.as_ref().and_then(|m| m.id)
    }

    pub fn into_create_input(self) -> CreateBeerInput {
        let manufacturer_id = self.manufacturer_id();

        CreateBeerInput {
            name: self.name,
            alcohol_by_volume: self.alcohol_by_volume,
            beer_type: self.beer_type,
            description: self.description,
            manufacturer_id,
        }
    }

    pub fn into_update_input(self, beer_id: i32) -> UpdateBeerInput {
        let manufacturer_id = self.manufacturer_id();

        UpdateBeerInput {
            beer_id,
            name: self.name,
            alcohol_by_volume: self.alcohol_by_volume,
            beer_type: self.beer_type,
            description: self.description,
            manufacturer_id,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema, Validate, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchBeersValidator {
    pub name: Option<String>,
    pub beer_type: Option<BeerType>,
    pub min_abv: Option<f64>,
    pub max_abv: Option<f64>,
    pub manufacturer_name: Option<String>,
    pub page: Option<u64>,

    #[validate(range(min = 1, message = "size must be greater than 0"))]
    pub size: Option<u64>,

    #[schema(example = "name")]
    pub sort_by: Option<String>,

    #[schema(example = "asc")]
    pub direction: Option<String>,
}

impl From<SearchBeersValidator> for SearchBeersInput {
    fn from(payload: SearchBeersValidator) -> Self {
        Self {
            name: payload.name,
            beer_type: payload.beer_type,
            min_abv: payload.min_abv,
            max_abv: payload.max_abv,
            manufacturer_name: payload.manufacturer_name,
            page: payload.page,
            size: payload.size,
            sort_by: payload.sort_by,
            direction: payload.direction,
        }
    }
}
