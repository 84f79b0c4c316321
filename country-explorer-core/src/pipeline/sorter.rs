//! Sorter

use crate::types::{Country, SortDirection};

use super::collation::CollationKey;

/// Order every record by official name.
///
/// Returns references in a new vector; `dataset` is left untouched. The
/// descending order is the exact reverse of the ascending one.
pub fn sort_countries(dataset: &[Country], direction: SortDirection) -> Vec<&Country> {
    let mut sorted: Vec<&Country> = dataset.iter().collect();
    sorted.sort_by_cached_key(|country| CollationKey::new(country.id()));
    if direction == SortDirection::Descending {
        sorted.reverse();
    }
    sorted
}
