use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeerType {
    Ipa,
    Lager,
    Stout,
    Pilsner,
    PaleAle,
    Porter,
    Wheat,
    Sour,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManufacturerDetails {
    pub id: i32,
    pub name: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Beer {
    pub id: i32,
    pub name: String,
    pub alcohol_by_volume: Option<f64>,
    pub beer_type: BeerType,
    pub description: Option<String>,
    pub manufacturer_details: ManufacturerDetails,
}

impl Beer {
    pub fn update(
        &mut self,
        name: String,
        alcohol_by_volume: Option<f64>,
        beer_type: BeerType,
        description: Option<String>,
    ) {
        self.name = name;
        self.alcohol_by_volume = alcohol_by_volume;
        self.beer_type = beer_type;
        self.description = description;
    }
}
