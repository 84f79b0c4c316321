//! REST Countries `CountrySource` implementation

use async_trait::async_trait;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::CountrySource;
use crate::types::Country;

use super::RestCountriesSource;

#[async_trait]
impl CountrySource for RestCountriesSource {
    fn name(&self) -> &'static str {
        "restcountries"
    }

    async fn fetch_all(&self) -> Result<Vec<Country>> {
        let request = self.client.get(&self.endpoint);
        let body = HttpUtils::execute_request(request, self.name(), &self.endpoint).await?;
        let countries: Vec<Country> = HttpUtils::parse_json(&body, self.name())?;

        log::info!(
            "[{}] Fetched {} countries from {}",
            self.name(),
            countries.len(),
            self.endpoint
        );
        Ok(countries)
    }
}
