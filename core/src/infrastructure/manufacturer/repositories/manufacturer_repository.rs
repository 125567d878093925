use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, QueryOrder, Select,
};
use tracing::error;

use crate::domain::{
    beer::entities::ManufacturerDetails,
    common::entities::app_errors::CoreError,
    manufacturer::{
        entities::Manufacturer, ports::ManufacturerRepository,
        value_objects::CreateManufacturerInput,
    },
};
use crate::entity::{
    beers::{Column as BeerColumn, Entity as BeerEntity},
    manufacturers::{
        ActiveModel as ManufacturerActiveModel, Column as ManufacturerColumn,
        Entity as ManufacturerEntity,
    },
};
use crate::infrastructure::manufacturer::mappers::map_manufacturer;

#[derive(Debug, Clone)]
pub struct PostgresManufacturerRepository {
    pub db: DatabaseConnection,
}

impl PostgresManufacturerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn fetch_with_beers(
        &self,
        select: Select<ManufacturerEntity>,
    ) -> Result<Vec<Manufacturer>, CoreError> {
        let rows = select
            .find_with_related(BeerEntity)
            .order_by_asc(ManufacturerColumn::Id)
            .order_by_asc(BeerColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch manufacturers: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(rows.into_iter().map(map_manufacturer).collect())
    }
}

impl ManufacturerRepository for PostgresManufacturerRepository {
    async fn fetch_manufacturers(&self) -> Result<Vec<Manufacturer>, CoreError> {
        self.fetch_with_beers(ManufacturerEntity::find()).await
    }

    async fn get_by_id(&self, manufacturer_id: i32) -> Result<Option<Manufacturer>, CoreError> {
        let manufacturers = self
            .fetch_with_beers(ManufacturerEntity::find_by_id(manufacturer_id))
            .await?;

        Ok(manufacturers.into_iter().next())
    }

    async fn get_details(
        &self,
        manufacturer_id: i32,
    ) -> Result<Option<ManufacturerDetails>, CoreError> {
        let manufacturer = ManufacturerEntity::find_by_id(manufacturer_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get manufacturer by id: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(manufacturer.as_ref().map(ManufacturerDetails::from))
    }

    async fn create(&self, input: CreateManufacturerInput) -> Result<Manufacturer, CoreError> {
        let created = ManufacturerActiveModel {
            name: Set(input.name),
            country: Set(input.country),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to create manufacturer: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(map_manufacturer((created, vec![])))
    }

    async fn update(&self, manufacturer: Manufacturer) -> Result<Manufacturer, CoreError> {
        ManufacturerActiveModel {
            id: Set(manufacturer.id),
            name: Set(manufacturer.name),
            country: Set(manufacturer.country),
        }
        .update(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to update manufacturer: {}", e);
            CoreError::InternalServerError
        })?;

        self.get_by_id(manufacturer.id)
            .await?
            .ok_or(CoreError::InternalServerError)
    }

    /// Beers go with their manufacturer through the foreign key cascade.
    async fn delete(&self, manufacturer_id: i32) -> Result<(), CoreError> {
        ManufacturerEntity::delete_by_id(manufacturer_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete manufacturer: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
