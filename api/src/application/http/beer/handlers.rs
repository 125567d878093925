pub mod create_beer;
pub mod delete_beer;
pub mod get_beer;
pub mod get_beers;
pub mod search_beers;
pub mod update_beer;
