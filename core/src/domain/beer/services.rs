use tracing::{debug, info, instrument, warn};

use crate::domain::{
    beer::{
        entities::{Beer, ManufacturerDetails},
        ports::{BeerRepository, BeerService},
        query::BeerQuery,
        value_objects::{CreateBeerInput, NewBeer, SearchBeersInput, UpdateBeerInput},
    },
    common::{entities::app_errors::CoreError, services::Service, value_objects::Page},
    health::ports::HealthCheckRepository,
    manufacturer::{ports::ManufacturerRepository, services::manufacturer_not_found},
};

const MANUFACTURER_REQUIRED: &str = "Manufacturer ID is required to set the manufacturer for the beer";
const MANUFACTURER_MISSING: &str = "Failed to set manufacturer for beer because it does not exist";

pub(crate) fn beer_not_found(beer_id: i32) -> CoreError {
    CoreError::NotFound(format!("Beer with id {beer_id} not found"))
}

fn ensure_valid_abv(alcohol_by_volume: Option<f64>) -> Result<(), CoreError> {
    match alcohol_by_volume {
        Some(abv) if abv.is_nan() || abv < 0.0 => Err(CoreError::UnvalidatedInput(
            "alcohol by volume must be a non-negative number".to_string(),
        )),
        _ => Ok(()),
    }
}

impl<B, M, HC> Service<B, M, HC>
where
    B: BeerRepository,
    M: ManufacturerRepository,
    HC: HealthCheckRepository,
{
    async fn find_beer(&self, beer_id: i32) -> Result<Beer, CoreError> {
        self.beer_repository
            .get_by_id(beer_id)
            .await?
            .ok_or_else(|| beer_not_found(beer_id))
    }

    /// Looks up the manufacturer a beer is being attached to. Any failure,
    /// including a missing row, becomes a dependency fault carrying the cause.
    async fn associate_manufacturer(
        &self,
        manufacturer_id: i32,
    ) -> Result<ManufacturerDetails, CoreError> {
        self.manufacturer_repository
            .get_details(manufacturer_id)
            .await
            .and_then(|manufacturer| {
                manufacturer.ok_or_else(|| manufacturer_not_found(manufacturer_id))
            })
            .map_err(|e| {
                warn!(manufacturer_id, error = %e, "manufacturer association failed");
                CoreError::dependency_fault(MANUFACTURER_MISSING, e)
            })
    }
}

impl<B, M, HC> BeerService for Service<B, M, HC>
where
    B: BeerRepository,
    M: ManufacturerRepository,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self))]
    async fn get_beers(&self, sort_by: String, direction: String) -> Result<Vec<Beer>, CoreError> {
        let query = BeerQuery::list(&sort_by, &direction)?;

        self.beer_repository.find_all(query).await
    }

    #[instrument(skip(self))]
    async fn search_beers(&self, input: SearchBeersInput) -> Result<Page<Beer>, CoreError> {
        let (query, window) = BeerQuery::search(&input)?;
        debug!(
            predicates = query.filter.predicates().len(),
            page = window.page,
            size = window.size,
            "searching beers"
        );

        self.beer_repository.find_page(query, window).await
    }

    #[instrument(skip(self))]
    async fn get_beer(&self, beer_id: i32) -> Result<Beer, CoreError> {
        self.find_beer(beer_id).await
    }

    #[instrument(skip(self), fields(name = %input.name))]
    async fn create_beer(&self, input: CreateBeerInput) -> Result<Beer, CoreError> {
        let manufacturer_id = input
            .manufacturer_id
            .ok_or_else(|| CoreError::UnvalidatedInput(MANUFACTURER_REQUIRED.to_string()))?;
        ensure_valid_abv(input.alcohol_by_volume)?;

        let manufacturer = self.associate_manufacturer(manufacturer_id).await?;

        let beer = self
            .beer_repository
            .create(NewBeer {
                name: input.name,
                alcohol_by_volume: input.alcohol_by_volume,
                beer_type: input.beer_type,
                description: input.description,
                manufacturer_id: manufacturer.id,
            })
            .await?;

        info!(beer_id = beer.id, "beer created");
        Ok(beer)
    }

    #[instrument(skip(self), fields(beer_id = input.beer_id))]
    async fn update_beer(&self, input: UpdateBeerInput) -> Result<Beer, CoreError> {
        ensure_valid_abv(input.alcohol_by_volume)?;

        let mut beer = self.find_beer(input.beer_id).await?;
        beer.update(
            input.name,
            input.alcohol_by_volume,
            input.beer_type,
            input.description,
        );

        if let Some(manufacturer_id) = input.manufacturer_id {
            beer.manufacturer_details = self.associate_manufacturer(manufacturer_id).await?;
        }

        self.beer_repository.update(beer).await
    }

    #[instrument(skip(self))]
    async fn delete_beer(&self, beer_id: i32) -> Result<(), CoreError> {
        self.find_beer(beer_id).await?;
        self.beer_repository.delete(beer_id).await?;

        info!(beer_id, "beer deleted");
        Ok(())
    }
}
