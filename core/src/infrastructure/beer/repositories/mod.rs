pub mod beer_repository;
