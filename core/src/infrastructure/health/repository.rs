use std::time::Instant;

use sea_orm::DatabaseConnection;
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: DatabaseConnection,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let start = Instant::now();
        let result = self.db.ping().await;
        let elapsed = start.elapsed().as_millis() as u64;

        match result {
            Ok(()) => Ok(DatabaseHealthStatus::up(elapsed)),
            Err(e) => {
                error!("Database readiness check failed: {}", e);
                Ok(DatabaseHealthStatus::down(elapsed))
            }
        }
    }

    async fn health(&self) -> Result<u64, CoreError> {
        let start = Instant::now();
        self.db.ping().await.map_err(|e| {
            error!("Database health check failed: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(start.elapsed().as_millis() as u64)
    }
}
