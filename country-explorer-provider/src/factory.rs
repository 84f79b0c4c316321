//! Source factory functions.

use std::sync::Arc;

use crate::error::Result;
use crate::providers::RestCountriesSource;
use crate::traits::CountrySource;

/// Creates the [`CountrySource`] used by the explorer.
///
/// `endpoint` overrides the default REST Countries URL; `None` or an empty
/// string keeps the default. The source is returned as
/// `Arc<dyn CountrySource>` so it can be moved into a spawned task.
///
/// # Examples
///
/// ```rust,no_run
/// use country_explorer_provider::{create_source, CountrySource};
///
/// let source = create_source(Some("http://localhost:8080/all.json")).unwrap();
/// assert_eq!(source.name(), "restcountries");
/// ```
pub fn create_source(endpoint: Option<&str>) -> Result<Arc<dyn CountrySource>> {
    let source = match endpoint.map(str::trim) {
        Some(url) if !url.is_empty() => RestCountriesSource::with_endpoint(url)?,
        _ => RestCountriesSource::new()?,
    };
    log::debug!("Using country source {} ({})", source.name(), source.endpoint());
    Ok(Arc::new(source))
}
