use crate::domain::{
    beer::{
        sort::{DEFAULT_SORT_DIRECTION, DEFAULT_SORT_FIELD, SortSpec},
        specification::{
            BeerFilter, abv_at_least, abv_at_most, has_type, manufacturer_name_contains,
            name_contains,
        },
        value_objects::SearchBeersInput,
    },
    common::{entities::app_errors::CoreError, value_objects::PageWindow},
};

/// A single read against the beer store: filter plus ordering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BeerQuery {
    pub filter: BeerFilter,
    pub sort: SortSpec,
}

impl BeerQuery {
    /// Unfiltered query used by the list endpoint.
    pub fn list(sort_by: &str, direction: &str) -> Result<Self, CoreError> {
        Ok(Self {
            filter: BeerFilter::default(),
            sort: SortSpec::parse(sort_by, direction)?,
        })
    }

    /// Filtered query plus the page window for the search endpoint.
    ///
    /// The sort field and window are validated before any predicate is built.
    pub fn search(criteria: &SearchBeersInput) -> Result<(Self, PageWindow), CoreError> {
        let sort = SortSpec::parse(
            criteria.sort_by.as_deref().unwrap_or(DEFAULT_SORT_FIELD),
            criteria.direction.as_deref().unwrap_or(DEFAULT_SORT_DIRECTION),
        )?;
        let window = PageWindow::new(criteria.page, criteria.size)?;

        let filter = BeerFilter::all_of([
            name_contains(criteria.name.as_deref()),
            has_type(criteria.beer_type),
            abv_at_least(criteria.min_abv),
            abv_at_most(criteria.max_abv),
            manufacturer_name_contains(criteria.manufacturer_name.as_deref()),
        ]);

        Ok((Self { filter, sort }, window))
    }
}
