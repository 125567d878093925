pub mod beer;
pub mod db;
pub mod health;
pub mod manufacturer;
