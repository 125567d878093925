pub mod manufacturer_repository;
