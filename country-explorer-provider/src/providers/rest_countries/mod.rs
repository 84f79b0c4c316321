//! REST Countries source

mod source;

use reqwest::Client;

use crate::error::Result;
use crate::http_client::create_http_client;

/// Endpoint returning every country in the v3.1 schema.
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1/all";

/// Fetches the country list from a REST Countries compatible endpoint.
#[derive(Debug)]
pub struct RestCountriesSource {
    pub(crate) client: Client,
    pub(crate) endpoint: String,
}

impl RestCountriesSource {
    /// Source reading from [`DEFAULT_ENDPOINT`].
    pub fn new() -> Result<Self> {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Source reading from a custom endpoint (mirrors, local fixtures).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: create_http_client()?,
            endpoint: endpoint.into(),
        })
    }

    /// Endpoint this source reads from.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
