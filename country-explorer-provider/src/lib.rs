//! # country-explorer-provider
//!
//! Data source layer of the country explorer: the country record schema,
//! the [`CountrySource`] abstraction and the REST Countries HTTP
//! implementation.
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: use rustls for HTTPS.
//! - **`native-tls`**: use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use country_explorer_provider::{create_source, CountrySource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = create_source(None)?;
//!     let countries = source.fetch_all().await?;
//!     for country in countries.iter().take(5) {
//!         println!("{} ({})", country.name.official, country.cca3);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every failure is a [`FetchError`]: transport problems, non-2xx statuses
//! and undecodable bodies alike. Nothing is retried.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{FetchError, Result};

// Re-export factory functions
pub use factory::create_source;

pub use traits::CountrySource;

pub use types::{Country, CountryName, Flags, Idd, NOT_AVAILABLE, NativeName, group_thousands};

pub use providers::{DEFAULT_ENDPOINT, RestCountriesSource};

pub use utils::log_sanitizer::truncate_for_log;
