use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::catalog::Category;

/// One category's slice of a total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub category: Category,
    pub value: Decimal,
    pub percentage: Decimal,
}

/// Breakdown of a total across categories, in canonical catalog order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDistribution {
    pub categories: Vec<CategoryShare>,
}

/// Sum `(category, value)` pairs into a total and a per-category
/// distribution.
///
/// Percentages are 0 (never NaN or infinite) when the total is 0, and the
/// category values always sum back to the returned total. Empty input
/// yields a zero total and an empty distribution.
pub fn distribute<I>(entries: I) -> (Decimal, CategoryDistribution)
where
    I: IntoIterator<Item = (Category, Decimal)>,
{
    let mut totals: BTreeMap<Category, Decimal> = BTreeMap::new();
    let mut total = Decimal::ZERO;

    for (category, value) in entries {
        *totals.entry(category).or_insert(Decimal::ZERO) += value;
        total += value;
    }

    let categories = totals
        .into_iter()
        .map(|(category, value)| {
            let percentage = if total.is_zero() {
                Decimal::ZERO
            } else {
                (value / total * dec!(100)).round_dp(2)
            };
            CategoryShare {
                category,
                value,
                percentage,
            }
        })
        .collect();

    (total, CategoryDistribution { categories })
}
