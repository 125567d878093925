use std::future::Future;

use crate::domain::{
    beer::entities::ManufacturerDetails,
    common::entities::app_errors::CoreError,
    manufacturer::{
        entities::Manufacturer,
        value_objects::{CreateManufacturerInput, UpdateManufacturerInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ManufacturerService: Send + Sync {
    fn get_manufacturers(&self) -> impl Future<Output = Result<Vec<Manufacturer>, CoreError>> + Send;

    fn get_manufacturer(
        &self,
        manufacturer_id: i32,
    ) -> impl Future<Output = Result<Manufacturer, CoreError>> + Send;

    fn create_manufacturer(
        &self,
        input: CreateManufacturerInput,
    ) -> impl Future<Output = Result<Manufacturer, CoreError>> + Send;

    fn update_manufacturer(
        &self,
        input: UpdateManufacturerInput,
    ) -> impl Future<Output = Result<Manufacturer, CoreError>> + Send;

    fn delete_manufacturer(
        &self,
        manufacturer_id: i32,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ManufacturerRepository: Send + Sync {
    fn fetch_manufacturers(
        &self,
    ) -> impl Future<Output = Result<Vec<Manufacturer>, CoreError>> + Send;

    fn get_by_id(
        &self,
        manufacturer_id: i32,
    ) -> impl Future<Output = Result<Option<Manufacturer>, CoreError>> + Send;

    /// Manufacturer columns only, without loading its beers.
    fn get_details(
        &self,
        manufacturer_id: i32,
    ) -> impl Future<Output = Result<Option<ManufacturerDetails>, CoreError>> + Send;

    fn create(
        &self,
        input: CreateManufacturerInput,
    ) -> impl Future<Output = Result<Manufacturer, CoreError>> + Send;

    fn update(
        &self,
        manufacturer: Manufacturer,
    ) -> impl Future<Output = Result<Manufacturer, CoreError>> + Send;

    fn delete(&self, manufacturer_id: i32) -> impl Future<Output = Result<(), CoreError>> + Send;
}
