#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use brewdex_api::{
    application::http::server::{app_state::AppState, http_server::router},
    args::Args,
};
use brewdex_core::{
    application::service_from_db,
    entity::{beers, manufacturers, sea_orm_active_enums::BeerType},
};
use clap::Parser;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection, EntityTrait, Schema,
};

pub struct Fixture {
    pub manufacturer_id: i32,
    pub beer_1_id: i32,
    pub beer_2_id: i32,
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    db.execute(backend.build(&schema.create_table_from_entity(entity)))
        .await
        .unwrap();
}

async fn seed(db: &DatabaseConnection) -> Fixture {
    let manufacturer_id = manufacturers::ActiveModel {
        name: Set("Test Manufacturer".to_string()),
        country: Set("Spain".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .id;

    let mut ids = Vec::new();
    for (name, abv, beer_type) in [("Beer 1", 5.5, BeerType::Ipa), ("Beer 2", 3.5, BeerType::Lager)] {
        let beer = beers::ActiveModel {
            name: Set(name.to_string()),
            alcohol_by_volume: Set(Some(abv)),
            beer_type: Set(beer_type),
            description: Set(Some("Test beer description".to_string())),
            manufacturer_id: Set(manufacturer_id),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
        ids.push(beer.id);
    }

    Fixture {
        manufacturer_id,
        beer_1_id: ids[0],
        beer_2_id: ids[1],
    }
}

/// Router over a seeded in-memory catalog.
pub async fn test_server() -> (TestServer, Fixture) {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    create_table(&db, manufacturers::Entity).await;
    create_table(&db, beers::Entity).await;
    let fixture = seed(&db).await;

    let args = Args::parse_from(["brewdex-api", "--server-root-path", ""]);
    let state = AppState::new(Arc::new(args), service_from_db(db));
    let server = TestServer::new(router(state).unwrap()).unwrap();

    (server, fixture)
}
