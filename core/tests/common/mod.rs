#![allow(dead_code)]

use brewdex_core::{
    application::{BrewdexService, service_from_db},
    entity::{beers, manufacturers, sea_orm_active_enums::BeerType},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection, EntityTrait, Schema,
};

pub struct Fixture {
    pub manufacturer_id: i32,
    pub beer_1_id: i32,
    pub beer_2_id: i32,
}

/// Single-connection in-memory database, so every query sees the same schema.
pub async fn connect() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options).await.unwrap();
    create_table(&db, manufacturers::Entity).await;
    create_table(&db, beers::Entity).await;
    db
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    db.execute(backend.build(&schema.create_table_from_entity(entity)))
        .await
        .unwrap();
}

pub async fn insert_manufacturer(db: &DatabaseConnection, name: &str, country: &str) -> i32 {
    manufacturers::ActiveModel {
        name: Set(name.to_string()),
        country: Set(country.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .id
}

pub async fn insert_beer(
    db: &DatabaseConnection,
    name: &str,
    abv: f64,
    beer_type: BeerType,
    manufacturer_id: i32,
) -> i32 {
    beers::ActiveModel {
        name: Set(name.to_string()),
        alcohol_by_volume: Set(Some(abv)),
        beer_type: Set(beer_type),
        description: Set(None),
        manufacturer_id: Set(manufacturer_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .id
}

/// "Test Manufacturer" from Spain brewing "Beer 1" (5.5, IPA) and
/// "Beer 2" (3.5, LAGER).
pub async fn seeded() -> (BrewdexService, DatabaseConnection, Fixture) {
    let db = connect().await;
    let manufacturer_id = insert_manufacturer(&db, "Test Manufacturer", "Spain").await;
    let beer_1_id = insert_beer(&db, "Beer 1", 5.5, BeerType::Ipa, manufacturer_id).await;
    let beer_2_id = insert_beer(&db, "Beer 2", 3.5, BeerType::Lager, manufacturer_id).await;

    (
        service_from_db(db.clone()),
        db,
        Fixture {
            manufacturer_id,
            beer_1_id,
            beer_2_id,
        },
    )
}
