use std::future::Future;

use crate::domain::{
    beer::{
        entities::Beer,
        query::BeerQuery,
        value_objects::{CreateBeerInput, NewBeer, SearchBeersInput, UpdateBeerInput},
    },
    common::{
        entities::app_errors::CoreError,
        value_objects::{Page, PageWindow},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait BeerService: Send + Sync {
    fn get_beers(
        &self,
        sort_by: String,
        direction: String,
    ) -> impl Future<Output = Result<Vec<Beer>, CoreError>> + Send;

    fn search_beers(
        &self,
        input: SearchBeersInput,
    ) -> impl Future<Output = Result<Page<Beer>, CoreError>> + Send;

    fn get_beer(&self, beer_id: i32) -> impl Future<Output = Result<Beer, CoreError>> + Send;

    fn create_beer(
        &self,
        input: CreateBeerInput,
    ) -> impl Future<Output = Result<Beer, CoreError>> + Send;

    fn update_beer(
        &self,
        input: UpdateBeerInput,
    ) -> impl Future<Output = Result<Beer, CoreError>> + Send;

    fn delete_beer(&self, beer_id: i32) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Storage collaborator for beers.
#[cfg_attr(test, mockall::automock)]
pub trait BeerRepository: Send + Sync {
    /// Every beer matching the query, in query order.
    fn find_all(&self, query: BeerQuery)
    -> impl Future<Output = Result<Vec<Beer>, CoreError>> + Send;

    /// One window of the matching beers together with the total match count.
    fn find_page(
        &self,
        query: BeerQuery,
        window: PageWindow,
    ) -> impl Future<Output = Result<Page<Beer>, CoreError>> + Send;

    fn get_by_id(
        &self,
        beer_id: i32,
    ) -> impl Future<Output = Result<Option<Beer>, CoreError>> + Send;

    fn create(&self, beer: NewBeer) -> impl Future<Output = Result<Beer, CoreError>> + Send;

    fn update(&self, beer: Beer) -> impl Future<Output = Result<Beer, CoreError>> + Send;

    fn delete(&self, beer_id: i32) -> impl Future<Output = Result<(), CoreError>> + Send;
}
