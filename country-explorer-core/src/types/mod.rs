//! Type definition module

mod page;
mod sort;

pub use page::PageInfo;
pub use sort::SortDirection;

// Re-export the record types of the provider library
pub use country_explorer_provider::{Country, CountryName, Flags, Idd, NativeName, NOT_AVAILABLE};
