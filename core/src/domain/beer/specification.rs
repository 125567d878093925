//! Filter predicates over beers.
//!
//! Each builder looks at a single criterion and returns `None` when that
//! criterion is absent, so an unset field never contributes a clause.

use crate::domain::beer::entities::BeerType;

#[derive(Debug, Clone, PartialEq)]
pub enum BeerPredicate {
    /// Case-insensitive substring of the beer name. Holds the lowercased needle.
    NameContains(String),
    TypeEquals(BeerType),
    AbvAtLeast(f64),
    AbvAtMost(f64),
    /// Case-insensitive substring of the manufacturer name, through the join.
    ManufacturerNameContains(String),
}

pub fn name_contains(name: Option<&str>) -> Option<BeerPredicate> {
    name.map(|name| BeerPredicate::NameContains(name.to_lowercase()))
}

pub fn has_type(beer_type: Option<BeerType>) -> Option<BeerPredicate> {
    beer_type.map(BeerPredicate::TypeEquals)
}

pub fn abv_at_least(min_abv: Option<f64>) -> Option<BeerPredicate> {
    min_abv.map(BeerPredicate::AbvAtLeast)
}

pub fn abv_at_most(max_abv: Option<f64>) -> Option<BeerPredicate> {
    max_abv.map(BeerPredicate::AbvAtMost)
}

pub fn manufacturer_name_contains(manufacturer_name: Option<&str>) -> Option<BeerPredicate> {
    manufacturer_name.map(|name| BeerPredicate::ManufacturerNameContains(name.to_lowercase()))
}

/// Conjunction of the predicates that are present.
///
/// An empty filter matches every beer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BeerFilter {
    predicates: Vec<BeerPredicate>,
}

impl BeerFilter {
    pub fn all_of<I>(predicates: I) -> Self
    where
        I: IntoIterator<Item = Option<BeerPredicate>>,
    {
        Self {
            predicates: predicates.into_iter().flatten().collect(),
        }
    }

    pub fn predicates(&self) -> &[BeerPredicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}
