use tracing::error;

use crate::domain::{
    beer::entities::{Beer, BeerType, ManufacturerDetails},
    common::entities::app_errors::CoreError,
};
use crate::entity::{beers, manufacturers, sea_orm_active_enums::BeerType as BeerTypeModel};

impl From<BeerTypeModel> for BeerType {
    fn from(model: BeerTypeModel) -> Self {
        match model {
            BeerTypeModel::Ipa => BeerType::Ipa,
            BeerTypeModel::Lager => BeerType::Lager,
            BeerTypeModel::Stout => BeerType::Stout,
            BeerTypeModel::Pilsner => BeerType::Pilsner,
            BeerTypeModel::PaleAle => BeerType::PaleAle,
            BeerTypeModel::Porter => BeerType::Porter,
            BeerTypeModel::Wheat => BeerType::Wheat,
            BeerTypeModel::Sour => BeerType::Sour,
        }
    }
}

impl From<BeerType> for BeerTypeModel {
    fn from(beer_type: BeerType) -> Self {
        match beer_type {
            BeerType::Ipa => BeerTypeModel::Ipa,
            BeerType::Lager => BeerTypeModel::Lager,
            BeerType::Stout => BeerTypeModel::Stout,
            BeerType::Pilsner => BeerTypeModel::Pilsner,
            BeerType::PaleAle => BeerTypeModel::PaleAle,
            BeerType::Porter => BeerTypeModel::Porter,
            BeerType::Wheat => BeerTypeModel::Wheat,
            BeerType::Sour => BeerTypeModel::Sour,
        }
    }
}

impl From<&manufacturers::Model> for ManufacturerDetails {
    fn from(model: &manufacturers::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            country: model.country.clone(),
        }
    }
}

/// Maps a beer row joined with its manufacturer. The foreign key is not
/// nullable, so a missing manufacturer means the join itself is broken.
pub fn map_beer(
    (model, manufacturer): (beers::Model, Option<manufacturers::Model>),
) -> Result<Beer, CoreError> {
    let manufacturer = manufacturer.ok_or_else(|| {
        error!(
            beer_id = model.id,
            manufacturer_id = model.manufacturer_id,
            "Beer row has no joined manufacturer"
        );
        CoreError::InternalServerError
    })?;

    Ok(Beer {
        id: model.id,
        name: model.name,
        alcohol_by_volume: model.alcohol_by_volume,
        beer_type: model.beer_type.into(),
        description: model.description,
        manufacturer_details: ManufacturerDetails::from(&manufacturer),
    })
}

pub fn map_beers(
    rows: Vec<(beers::Model, Option<manufacturers::Model>)>,
) -> Result<Vec<Beer>, CoreError> {
    rows.into_iter().map(map_beer).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beer_model() -> beers::Model {
        beers::Model {
            id: 1,
            name: "Beer 1".to_string(),
            alcohol_by_volume: Some(5.5),
            beer_type: BeerTypeModel::Ipa,
            description: None,
            manufacturer_id: 4,
        }
    }

    #[test]
    fn maps_joined_rows() {
        let manufacturer = manufacturers::Model {
            id: 4,
            name: "Test Manufacturer".to_string(),
            country: "Spain".to_string(),
        };

        let beer = map_beer((beer_model(), Some(manufacturer))).unwrap();

        assert_eq!(beer.beer_type, BeerType::Ipa);
        assert_eq!(beer.manufacturer_details.id, 4);
        assert_eq!(beer.manufacturer_details.country, "Spain");
    }

    #[test]
    fn rejects_rows_without_manufacturer() {
        let err = map_beer((beer_model(), None)).unwrap_err();
        assert_eq!(err, CoreError::InternalServerError);
    }
}
