use async_trait::async_trait;

use crate::error::Result;
use crate::types::Country;

/// A one-shot source of country records.
///
/// The explorer calls [`fetch_all`](Self::fetch_all) exactly once per
/// session. Implementations must not retry internally: any transport or
/// decode failure is returned as a [`FetchError`](crate::FetchError) and the
/// caller decides what to do with it.
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Source identifier (used in logs and error values).
    fn name(&self) -> &'static str;

    /// Fetch and decode the complete dataset.
    async fn fetch_all(&self) -> Result<Vec<Country>>;
}
