use serde::{Deserialize, Serialize};

use crate::domain::common::entities::app_errors::CoreError;

pub const DEFAULT_SORT_FIELD: &str = "name";
pub const DEFAULT_SORT_DIRECTION: &str = "asc";

/// Sort keys accepted from clients. Each key maps to exactly one beer
/// attribute; a token resolves when it equals either the key or the
/// attribute, ignoring case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BeerSortField {
    Name,
    Abv,
    Type,
    Manufacturer,
}

impl BeerSortField {
    pub const ALL: [BeerSortField; 4] = [
        BeerSortField::Name,
        BeerSortField::Abv,
        BeerSortField::Type,
        BeerSortField::Manufacturer,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            BeerSortField::Name => "name",
            BeerSortField::Abv => "abv",
            BeerSortField::Type => "type",
            BeerSortField::Manufacturer => "manufacturer",
        }
    }

    pub fn attribute(&self) -> &'static str {
        match self {
            BeerSortField::Name => "name",
            BeerSortField::Abv => "alcoholByVolume",
            BeerSortField::Type => "beerType",
            BeerSortField::Manufacturer => "manufacturerId",
        }
    }

    pub fn resolve(token: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|field| {
                field.key().eq_ignore_ascii_case(token)
                    || field.attribute().eq_ignore_ascii_case(token)
            })
            .ok_or_else(|| CoreError::InvalidSortField(token.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Unknown tokens fall back to ascending instead of failing.
    pub fn from_token(token: &str) -> Self {
        if token.trim().eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: BeerSortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn parse(sort_by: &str, direction: &str) -> Result<Self, CoreError> {
        Ok(Self {
            field: BeerSortField::resolve(sort_by)?,
            direction: SortDirection::from_token(direction),
        })
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: BeerSortField::Name,
            direction: SortDirection::Asc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_symbolic_keys_ignoring_case() {
        assert_eq!(BeerSortField::resolve("name").unwrap(), BeerSortField::Name);
        assert_eq!(BeerSortField::resolve("ABV").unwrap(), BeerSortField::Abv);
        assert_eq!(BeerSortField::resolve("Type").unwrap(), BeerSortField::Type);
        assert_eq!(
            BeerSortField::resolve("MANUFACTURER").unwrap(),
            BeerSortField::Manufacturer
        );
    }

    #[test]
    fn resolves_attribute_names_ignoring_case() {
        assert_eq!(
            BeerSortField::resolve("alcoholByVolume").unwrap(),
            BeerSortField::Abv
        );
        assert_eq!(
            BeerSortField::resolve("BEERTYPE").unwrap(),
            BeerSortField::Type
        );
        assert_eq!(
            BeerSortField::resolve("manufacturerid").unwrap(),
            BeerSortField::Manufacturer
        );
    }

    #[test]
    fn rejects_unknown_fields() {
        for token in ["invalidField", "", "description", "id", "names"] {
            let err = BeerSortField::resolve(token).unwrap_err();
            assert!(
                matches!(err, CoreError::InvalidSortField(_)),
                "{token} should be rejected"
            );
        }
    }

    #[test]
    fn surrounding_whitespace_is_not_ignored() {
        for token in [" name", "abv ", " type "] {
            assert_eq!(
                BeerSortField::resolve(token).unwrap_err(),
                CoreError::InvalidSortField(token.to_string())
            );
        }
    }

    #[test]
    fn every_field_resolves_from_its_own_names() {
        for field in BeerSortField::ALL {
            assert_eq!(BeerSortField::resolve(field.key()).unwrap(), field);
            assert_eq!(BeerSortField::resolve(field.attribute()).unwrap(), field);
        }
    }

    #[test]
    fn direction_is_lenient() {
        assert_eq!(SortDirection::from_token("desc"), SortDirection::Desc);
        assert_eq!(SortDirection::from_token("DESC"), SortDirection::Desc);
        assert_eq!(SortDirection::from_token("asc"), SortDirection::Asc);
        assert_eq!(SortDirection::from_token("sideways"), SortDirection::Asc);
        assert_eq!(SortDirection::from_token(""), SortDirection::Asc);
    }

    #[test]
    fn sort_spec_fails_only_on_the_field() {
        let spec = SortSpec::parse("abv", "nonsense").unwrap();
        assert_eq!(spec.field, BeerSortField::Abv);
        assert_eq!(spec.direction, SortDirection::Asc);

        assert!(SortSpec::parse("color", "desc").is_err());
    }
}
