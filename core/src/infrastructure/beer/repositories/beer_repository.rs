use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select, SelectTwo,
};
use tracing::error;

use crate::domain::{
    beer::{
        entities::Beer,
        ports::BeerRepository,
        query::BeerQuery,
        value_objects::NewBeer,
    },
    common::{
        entities::app_errors::CoreError,
        value_objects::{Page, PageWindow},
    },
};
use crate::entity::{
    beers::{self, ActiveModel as BeerActiveModel, Column as BeerColumn, Entity as BeerEntity},
    manufacturers::Entity as ManufacturerEntity,
};
use crate::infrastructure::beer::{
    conditions::{filter_condition, sort_column, sort_order},
    mappers::{map_beer, map_beers},
};

#[derive(Debug, Clone)]
pub struct PostgresBeerRepository {
    pub db: DatabaseConnection,
}

impl PostgresBeerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Beers joined with their manufacturer, so both the manufacturer-name
    /// predicate and the output mapping can see its columns.
    fn joined(select: Select<BeerEntity>) -> SelectTwo<BeerEntity, ManufacturerEntity> {
        select.find_also_related(ManufacturerEntity)
    }

    fn filtered(query: &BeerQuery) -> SelectTwo<BeerEntity, ManufacturerEntity> {
        Self::joined(BeerEntity::find()).filter(filter_condition(&query.filter))
    }

    fn ordered(
        select: SelectTwo<BeerEntity, ManufacturerEntity>,
        query: &BeerQuery,
    ) -> SelectTwo<BeerEntity, ManufacturerEntity> {
        select
            .order_by(sort_column(query.sort.field), sort_order(query.sort.direction))
            .order_by_asc(BeerColumn::Id)
    }

    async fn fetch_one(&self, beer_id: i32) -> Result<Option<Beer>, CoreError> {
        Self::joined(BeerEntity::find_by_id(beer_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get beer by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(map_beer)
            .transpose()
    }
}

impl BeerRepository for PostgresBeerRepository {
    async fn find_all(&self, query: BeerQuery) -> Result<Vec<Beer>, CoreError> {
        let rows = Self::ordered(Self::filtered(&query), &query)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch beers: {}", e);
                CoreError::InternalServerError
            })?;

        map_beers(rows)
    }

    async fn find_page(&self, query: BeerQuery, window: PageWindow) -> Result<Page<Beer>, CoreError> {
        let select = Self::filtered(&query);

        let total = select.clone().count(&self.db).await.map_err(|e| {
            error!("Failed to count beers: {}", e);
            CoreError::InternalServerError
        })?;

        let rows = Self::ordered(select, &query)
            .offset(window.offset())
            .limit(window.limit())
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to search beers: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Page::new(map_beers(rows)?, window, total))
    }

    async fn get_by_id(&self, beer_id: i32) -> Result<Option<Beer>, CoreError> {
        self.fetch_one(beer_id).await
    }

    async fn create(&self, beer: NewBeer) -> Result<Beer, CoreError> {
        let created = BeerActiveModel {
            name: Set(beer.name),
            alcohol_by_volume: Set(beer.alcohol_by_volume),
            beer_type: Set(beer.beer_type.into()),
            description: Set(beer.description),
            manufacturer_id: Set(beer.manufacturer_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to create beer: {}", e);
            CoreError::InternalServerError
        })?;

        self.fetch_one(created.id)
            .await?
            .ok_or(CoreError::InternalServerError)
    }

    async fn update(&self, beer: Beer) -> Result<Beer, CoreError> {
        let updated: beers::Model = BeerActiveModel {
            id: Set(beer.id),
            name: Set(beer.name),
            alcohol_by_volume: Set(beer.alcohol_by_volume),
            beer_type: Set(beer.beer_type.into()),
            description: Set(beer.description),
            manufacturer_id: Set(beer.manufacturer_details.id),
        }
        .update(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to update beer: {}", e);
            CoreError::InternalServerError
        })?;

        self.fetch_one(updated.id)
            .await?
            .ok_or(CoreError::InternalServerError)
    }

    async fn delete(&self, beer_id: i32) -> Result<(), CoreError> {
        BeerEntity::delete_by_id(beer_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete beer: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
