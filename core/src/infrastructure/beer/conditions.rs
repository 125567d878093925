//! Renders domain predicates and sort specs as sea-orm query parts.

use sea_orm::{
    ColumnTrait, Condition, Order,
    sea_query::{Expr, Func, LikeExpr, SimpleExpr},
};

use crate::domain::beer::{
    sort::{BeerSortField, SortDirection},
    specification::{BeerFilter, BeerPredicate},
};
use crate::entity::{beers, manufacturers, sea_orm_active_enums::BeerType as BeerTypeModel};

const LIKE_ESCAPE: char = '\\';

/// Substring pattern with `%`, `_` and the escape character taken literally.
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn lower_like(column: SimpleExpr, needle: &str) -> SimpleExpr {
    Expr::expr(Func::lower(column)).like(LikeExpr::new(like_pattern(needle)).escape(LIKE_ESCAPE))
}

pub fn predicate_expr(predicate: &BeerPredicate) -> SimpleExpr {
    match predicate {
        BeerPredicate::NameContains(name) => lower_like(
            Expr::col((beers::Entity, beers::Column::Name)).into(),
            name,
        ),
        BeerPredicate::TypeEquals(beer_type) => {
            beers::Column::BeerType.eq(BeerTypeModel::from(*beer_type))
        }
        BeerPredicate::AbvAtLeast(min_abv) => beers::Column::AlcoholByVolume.gte(*min_abv),
        BeerPredicate::AbvAtMost(max_abv) => beers::Column::AlcoholByVolume.lte(*max_abv),
        // Needs the manufacturers table joined into the select.
        BeerPredicate::ManufacturerNameContains(name) => lower_like(
            Expr::col((manufacturers::Entity, manufacturers::Column::Name)).into(),
            name,
        ),
    }
}

/// AND of every predicate; with none it is an always-true condition.
pub fn filter_condition(filter: &BeerFilter) -> Condition {
    filter
        .predicates()
        .iter()
        .map(predicate_expr)
        .fold(Condition::all(), |condition, expr| condition.add(expr))
}

pub fn sort_column(field: BeerSortField) -> beers::Column {
    match field {
        BeerSortField::Name => beers::Column::Name,
        BeerSortField::Abv => beers::Column::AlcoholByVolume,
        BeerSortField::Type => beers::Column::BeerType,
        BeerSortField::Manufacturer => beers::Column::ManufacturerId,
    }
}

pub fn sort_order(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    }
}
