//! Fetch boundary
//!
//! The single place where a [`FetchError`](crate::error::FetchError) is
//! caught. A failure is logged once and the caller gets nothing back; there
//! is no retry.

use std::sync::Arc;

use country_explorer_provider::CountrySource;

use crate::error::CoreResult;
use crate::types::Country;

/// Loads the dataset from a [`CountrySource`].
pub struct DatasetLoader {
    source: Arc<dyn CountrySource>,
}

impl DatasetLoader {
    #[must_use]
    pub fn new(source: Arc<dyn CountrySource>) -> Self {
        Self { source }
    }

    /// Name of the underlying source.
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Fetch the dataset, returning the raw error on failure.
    pub async fn try_load(&self) -> CoreResult<Vec<Country>> {
        let countries = self.source.fetch_all().await?;
        log::info!(
            "[{}] Dataset loaded: {} countries",
            self.source.name(),
            countries.len()
        );
        Ok(countries)
    }

    /// Fetch the dataset, logging and swallowing any failure.
    ///
    /// `None` means the dataset stays unset for the rest of the session.
    pub async fn load(&self) -> Option<Vec<Country>> {
        match self.try_load().await {
            Ok(countries) => Some(countries),
            Err(e) => {
                if e.is_decode_failure() {
                    log::error!("Country data could not be decoded: {e}");
                } else {
                    log::error!("Country data could not be fetched: {e}");
                }
                None
            }
        }
    }
}
