// src/domain/filters.rs

use url::form_urlencoded;

pub const YEAR_FIELD: &str = "year_select";
pub const SUBURB_FIELD: &str = "suburb_select";
pub const LAYOUT_FIELD: &str = "layout_select";

/// Selections submitted from the explore form. Each control is a multi-select,
/// so every field holds zero or more values; an empty field means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaleFilters {
    pub years: Vec<i32>,
    pub suburb_ids: Vec<i64>,
    pub layout_ids: Vec<i64>,
}

impl SaleFilters {
    /// Parses an `application/x-www-form-urlencoded` body with repeated keys.
    /// Values that are empty or not numbers are dropped.
    pub fn from_form(body: &[u8]) -> Self {
        let mut filters = SaleFilters::default();

        for (key, value) in form_urlencoded::parse(body) {
            let value = value.trim();
            match key.as_ref() {
                YEAR_FIELD => push_parsed(&mut filters.years, value),
                SUBURB_FIELD => push_parsed(&mut filters.suburb_ids, value),
                LAYOUT_FIELD => push_parsed(&mut filters.layout_ids, value),
                _ => {}
            }
        }

        filters
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty() && self.suburb_ids.is_empty() && self.layout_ids.is_empty()
    }
}

fn push_parsed<T: std::str::FromStr + PartialEq>(out: &mut Vec<T>, raw: &str) {
    if let Ok(v) = raw.parse::<T>() {
        if !out.contains(&v) {
            out.push(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_keys_collect_into_lists() {
        let body = b"year_select=2024&year_select=2023&suburb_select=4&layout_select=&layout_select=7";
        let filters = SaleFilters::from_form(body);

        assert_eq!(filters.years, vec![2024, 2023]);
        assert_eq!(filters.suburb_ids, vec![4]);
        assert_eq!(filters.layout_ids, vec![7]);
    }

    #[test]
    fn junk_and_duplicates_are_dropped() {
        let body = b"year_select=abc&year_select=2022&year_select=2022&other=1";
        let filters = SaleFilters::from_form(body);

        assert_eq!(filters.years, vec![2022]);
        assert!(filters.suburb_ids.is_empty());
    }

    #[test]
    fn empty_body_means_no_filters() {
        assert!(SaleFilters::from_form(b"").is_empty());
    }
}
