//! Listing shape-up: case-insensitive search or single-key numeric sort.
//!
//! Shaping happens after the gateway call, on whatever rows came back.
//! Search and sort are exclusive; when a search term is present it wins
//! and any sort directive is ignored.

use std::cmp::Ordering;

use serde_json::Value;

use crate::JsonMap;

/// Sort directive parsed from a raw query value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// Parse `asc`/`desc` in any letter case. Anything else is no directive.
    #[must_use]
    pub fn parse(directive: &str) -> Option<Self> {
        if directive.eq_ignore_ascii_case("asc") {
            Some(Self::Ascending)
        } else if directive.eq_ignore_ascii_case("desc") {
            Some(Self::Descending)
        } else {
            None
        }
    }
}

/// Raw listing parameters as they come off a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    search: Option<String>,
    sort: Option<SortOrder>,
}

impl ListQuery {
    #[must_use]
    pub fn new(search: Option<&str>, sort_directive: Option<&str>) -> Self {
        Self {
            search: search.map(str::to_string),
            sort: sort_directive.and_then(SortOrder::parse),
        }
    }

    /// The search term, if one was given and is not blank.
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|term| !term.trim().is_empty())
    }

    #[must_use]
    pub const fn sort_order(&self) -> Option<SortOrder> {
        self.sort
    }
}

/// Keep the rows whose `field` contains `term`, compared case-insensitively.
/// A blank term keeps everything; rows without a string in `field` never match.
#[must_use]
pub fn filter_by_field(rows: Vec<JsonMap>, field: &str, term: &str) -> Vec<JsonMap> {
    if term.trim().is_empty() {
        return rows;
    }
    let needle = term.to_lowercase();
    rows.into_iter()
        .filter(|row| {
            row.get(field)
                .and_then(Value::as_str)
                .is_some_and(|text| text.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Sort rows by the numeric value of `field`, stably. Rows where `field`
/// is missing or not numeric order before every numeric row ascending,
/// after every numeric row descending.
pub fn sort_by_field(rows: &mut [JsonMap], field: &str, order: SortOrder) {
    rows.sort_by(|left, right| {
        let ordering = match (numeric_value(left, field), numeric_value(right, field)) {
            (Some(left), Some(right)) => left.total_cmp(&right),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        };
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}

fn numeric_value(row: &JsonMap, field: &str) -> Option<f64> {
    row.get(field).and_then(Value::as_f64)
}

/// Apply a listing query: search on `search_field` when a term is present,
/// otherwise sort on `sort_field` when a directive is present.
#[must_use]
pub fn apply(
    rows: Vec<JsonMap>,
    search_field: &str,
    sort_field: &str,
    query: &ListQuery,
) -> Vec<JsonMap> {
    if let Some(term) = query.search_term() {
        return filter_by_field(rows, search_field, term);
    }
    let mut rows = rows;
    if let Some(order) = query.sort_order() {
        sort_by_field(&mut rows, sort_field, order);
    }
    rows
}
