use sea_orm::DatabaseConnection;

use crate::{
    domain::common::{BrewdexConfig, services::Service},
    infrastructure::{
        beer::PostgresBeerRepository,
        db::postgres::{Postgres, PostgresConfig},
        health::PostgresHealthCheckRepository,
        manufacturer::PostgresManufacturerRepository,
    },
};

pub type BrewdexService = Service<
    PostgresBeerRepository,
    PostgresManufacturerRepository,
    PostgresHealthCheckRepository,
>;

/// Connects to the catalog database, applies pending migrations and wires
/// every repository into a single service.
pub async fn create_service(config: BrewdexConfig) -> Result<BrewdexService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;
    postgres.migrate().await?;

    Ok(service_from_db(postgres.get_db()))
}

pub fn service_from_db(db: DatabaseConnection) -> BrewdexService {
    Service::new(
        PostgresBeerRepository::new(db.clone()),
        PostgresManufacturerRepository::new(db.clone()),
        PostgresHealthCheckRepository::new(db),
    )
}
