//! Derivation pipeline
//!
//! Three pure stages, always run in this order on every render:
//!
//! ```text
//! dataset ──sort──▶ sorted ──filter──▶ filtered ──paginate──▶ page rows
//! ```
//!
//! None of them mutates its input and none of them can fail.

mod collation;
mod filter;
mod paginator;
mod sorter;

pub use filter::{filter_countries, matches_query};
pub use paginator::{paginate, total_pages, PAGE_SIZE};
pub use sorter::sort_countries;
