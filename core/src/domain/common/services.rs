use std::sync::Arc;

use crate::domain::{
    beer::ports::BeerRepository, health::ports::HealthCheckRepository,
    manufacturer::ports::ManufacturerRepository,
};

pub struct Service<B, M, HC>
where
    B: BeerRepository,
    M: ManufacturerRepository,
    HC: HealthCheckRepository,
{
    pub(crate) beer_repository: Arc<B>,
    pub(crate) manufacturer_repository: Arc<M>,
    pub(crate) health_check_repository: Arc<HC>,
}

impl<B, M, HC> Service<B, M, HC>
where
    B: BeerRepository,
    M: ManufacturerRepository,
    HC: HealthCheckRepository,
{
    pub fn new(beer_repository: B, manufacturer_repository: M, health_check_repository: HC) -> Self {
        Self {
            beer_repository: Arc::new(beer_repository),
            manufacturer_repository: Arc::new(manufacturer_repository),
            health_check_repository: Arc::new(health_check_repository),
        }
    }
}

impl<B, M, HC> Clone for Service<B, M, HC>
where
    B: BeerRepository,
    M: ManufacturerRepository,
    HC: HealthCheckRepository,
{
    fn clone(&self) -> Self {
        Self {
            beer_repository: Arc::clone(&self.beer_repository),
            manufacturer_repository: Arc::clone(&self.manufacturer_repository),
            health_check_repository: Arc::clone(&self.health_check_repository),
        }
    }
}
