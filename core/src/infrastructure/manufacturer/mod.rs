pub mod mappers;
pub mod repositories;

pub use repositories::manufacturer_repository::PostgresManufacturerRepository;
