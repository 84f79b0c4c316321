//! Unified error type definition

use thiserror::Error;

// Re-export library error type
pub use country_explorer_provider::FetchError;

/// Core layer error type
///
/// The view pipeline itself is total; the only thing that can fail is
/// obtaining the dataset.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The dataset could not be fetched or decoded
    #[error("Data fetch failed: {0}")]
    DataFetch(#[from] FetchError),
}

impl CoreError {
    /// Whether the failure came from an undecodable response (as opposed to
    /// the transport). Only used to pick the log message.
    #[must_use]
    pub fn is_decode_failure(&self) -> bool {
        match self {
            Self::DataFetch(e) => e.is_decode_failure(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_fetch_error() {
        let err: CoreError = FetchError::Network {
            source_name: "restcountries".to_string(),
            detail: "connection refused".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Data fetch failed: [restcountries] Network error: connection refused"
        );
        assert!(!err.is_decode_failure());
    }
}
