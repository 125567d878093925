pub mod beer;
pub mod health;
pub mod manufacturer;
pub mod server;
