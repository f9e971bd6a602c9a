//! Products domain module.
//!
//! Business rules for the catalog (record construction, full replace, price and
//! stock arithmetic, the listing pipeline), implemented as deterministic domain
//! logic (no IO, no HTTP, no storage).

pub mod product;
pub mod query;

pub use product::{Product, ProductFields};
pub use query::{ListQuery, Sort, SortField, SortOrder, UnknownSortField, parse_threshold};
