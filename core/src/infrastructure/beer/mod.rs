pub mod conditions;
pub mod mappers;
pub mod repositories;

pub use repositories::beer_repository::PostgresBeerRepository;
