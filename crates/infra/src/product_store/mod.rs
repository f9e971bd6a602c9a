//! Product storage boundary.
//!
//! Handlers only see the `ProductStore` trait; the in-memory implementation
//! owns the records and the id counter and is reset on every restart.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryProductStore;
pub use r#trait::ProductStore;
