//! Server-side row ordering
//!
//! A requested column is resolved through a short alias table (the rendered
//! header labels differ from the export's field names), parsed with the
//! percent or plain parser, and the rows are stably sorted on that key.
//! Rows without a usable value always go last, whichever direction is asked.

use crate::parse::{parse_number_opt, parse_percent_opt};
use crate::types::{Row, SortOrder};
use std::cmp::Ordering;

/// Display label → export field name
const COLUMN_ALIASES: &[(&str, &str)] = &[
    ("RS", "Composite RS"),
    ("DCR", "Daily Closing Range"),
    ("P.Contr", "Price Contraction"),
    ("ADR%", "ADR %"),
    ("Liq", "Daily Liquidity"),
    ("% Open", "% From Open"),
    ("Rank", "RS Rank"),
];

/// Export fields whose values may carry a `%` sign
const PERCENT_COLUMNS: &[&str] = &[
    "Composite RS",
    "Daily Closing Range",
    "Price Contraction",
    "ADR %",
    "% From Open",
];

/// Map a requested column name to the export field it reads.
pub fn resolve_column(name: &str) -> &str {
    COLUMN_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, field)| *field)
        .unwrap_or(name)
}

pub fn is_percent_column(field: &str) -> bool {
    PERCENT_COLUMNS.contains(&field)
}

/// Numeric sort key of `row` for the requested column, `None` when absent.
pub fn sort_key(row: &Row, column: &str) -> Option<f64> {
    let field = resolve_column(column);
    let raw = row.get(field);
    if is_percent_column(field) {
        parse_percent_opt(raw)
    } else {
        parse_number_opt(raw)
    }
}

/// Compare two optional keys: present values by `order`, absent values last.
pub fn compare_keys(a: Option<f64>, b: Option<f64>, order: SortOrder) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => match order {
            SortOrder::Asc => x.total_cmp(&y),
            SortOrder::Desc => y.total_cmp(&x),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable in-place sort of `rows` by `column`.
pub fn sort_rows(rows: &mut [Row], column: &str, order: SortOrder) {
    log::debug!(
        "Sorting {} rows by {:?} (field {:?}, {})",
        rows.len(),
        column,
        resolve_column(column),
        order
    );

    // Keys are parsed once up front rather than per comparison
    let mut keyed: Vec<(Option<f64>, Row)> = rows
        .iter_mut()
        .map(|row| (sort_key(row, column), std::mem::take(row)))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| compare_keys(*a, *b, order));

    for (slot, (_, row)) in rows.iter_mut().zip(keyed) {
        *slot = row;
    }
}
