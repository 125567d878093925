use crate::domain::manufacturer::entities::{Manufacturer, ManufacturerBeer};
use crate::entity::{beers, manufacturers};

impl From<beers::Model> for ManufacturerBeer {
    fn from(model: beers::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            alcohol_by_volume: model.alcohol_by_volume,
            beer_type: model.beer_type.into(),
            description: model.description,
        }
    }
}

pub fn map_manufacturer(
    (model, beers): (manufacturers::Model, Vec<beers::Model>),
) -> Manufacturer {
    Manufacturer {
        id: model.id,
        name: model.name,
        country: model.country,
        beers: beers.into_iter().map(ManufacturerBeer::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::beer::entities::BeerType;
    use crate::entity::sea_orm_active_enums::BeerType as BeerTypeModel;

    #[test]
    fn maps_manufacturer_with_beers() {
        let manufacturer = manufacturers::Model {
            id: 3,
            name: "Test Manufacturer".to_string(),
            country: "Spain".to_string(),
        };
        let beer = beers::Model {
            id: 9,
            name: "Beer 2".to_string(),
            alcohol_by_volume: Some(3.5),
            beer_type: BeerTypeModel::Lager,
            description: Some("Crisp".to_string()),
            manufacturer_id: 3,
        };

        let mapped = map_manufacturer((manufacturer, vec![beer]));

        assert_eq!(mapped.name, "Test Manufacturer");
        assert_eq!(mapped.beers.len(), 1);
        assert_eq!(mapped.beers[0].beer_type, BeerType::Lager);
        assert_eq!(mapped.beers[0].description.as_deref(), Some("Crisp"));
    }
}
