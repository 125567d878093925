pub mod beer;
pub mod common;
pub mod health;
pub mod manufacturer;
