use crate::domain::{
    beer::ports::BeerRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    manufacturer::ports::ManufacturerRepository,
};

impl<B, M, HC> HealthCheckService for Service<B, M, HC>
where
    B: BeerRepository,
    M: ManufacturerRepository,
    HC: HealthCheckRepository,
{
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
