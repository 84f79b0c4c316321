//! Filter

use crate::types::Country;

/// Whether the official name contains `query`, ignoring case.
///
/// Only case is folded; accented letters must match literally.
pub fn matches_query(country: &Country, query: &str) -> bool {
    country
        .id()
        .to_lowercase()
        .contains(&query.to_lowercase())
}

/// Keep the records whose official name contains `query` (case-insensitive).
///
/// Order is preserved. An empty query keeps everything.
pub fn filter_countries<'a>(sorted: Vec<&'a Country>, query: &str) -> Vec<&'a Country> {
    if query.is_empty() {
        return sorted;
    }
    let needle = query.to_lowercase();
    sorted
        .into_iter()
        .filter(|country| country.id().to_lowercase().contains(&needle))
        .collect()
}
