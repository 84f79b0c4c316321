//! Country source implementations

mod rest_countries;

pub use rest_countries::{RestCountriesSource, DEFAULT_ENDPOINT};
