pub mod create_manufacturer;
pub mod delete_manufacturer;
pub mod get_manufacturer;
pub mod get_manufacturers;
pub mod update_manufacturer;
