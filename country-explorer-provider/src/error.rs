use serde::{Deserialize, Serialize};

/// The single failure kind of a country data fetch.
///
/// Every variant means the same thing to callers: the dataset could not be
/// obtained. The variants only exist to give the log line a useful shape.
/// Each carries the `source_name` of the [`CountrySource`](crate::CountrySource)
/// that produced it.
///
/// No variant is retried; a failed fetch leaves the dataset unset for the
/// rest of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum FetchError {
    /// The HTTP client could not be constructed (TLS backend, invalid settings).
    ClientBuild {
        /// Error details.
        detail: String,
    },

    /// A transport-level error occurred (DNS resolution, connection refused,
    /// connection reset while reading the body, ...).
    Network {
        /// Source that produced the error.
        source_name: String,
        /// Error details.
        detail: String,
    },

    /// The endpoint answered with a non-success HTTP status.
    HttpStatus {
        /// Source that produced the error.
        source_name: String,
        /// HTTP status code.
        status: u16,
        /// Response body, truncated for logging.
        body: String,
    },

    /// The response body could not be decoded into country records.
    Parse {
        /// Source that produced the error.
        source_name: String,
        /// Details about the decode failure.
        detail: String,
    },
}

impl FetchError {
    /// Name of the source that produced the error, if any.
    pub fn source_name(&self) -> Option<&str> {
        match self {
            Self::ClientBuild { .. } => None,
            Self::Network { source_name, .. }
            | Self::HttpStatus { source_name, .. }
            | Self::Parse { source_name, .. } => Some(source_name),
        }
    }

    /// Whether the error came from the response rather than the transport.
    ///
    /// Used only to pick a log message; both kinds are handled identically.
    #[must_use]
    pub fn is_decode_failure(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClientBuild { detail } => {
                write!(f, "Failed to build HTTP client: {detail}")
            }
            Self::Network {
                source_name,
                detail,
            } => {
                write!(f, "[{source_name}] Network error: {detail}")
            }
            Self::HttpStatus {
                source_name,
                status,
                body,
            } => {
                if body.is_empty() {
                    write!(f, "[{source_name}] HTTP {status}")
                } else {
                    write!(f, "[{source_name}] HTTP {status}: {body}")
                }
            }
            Self::Parse {
                source_name,
                detail,
            } => {
                write!(f, "[{source_name}] Parse error: {detail}")
            }
        }
    }
}

impl std::error::Error for FetchError {}

/// Convenience type alias for `Result<T, FetchError>`.
pub type Result<T> = std::result::Result<T, FetchError>;
