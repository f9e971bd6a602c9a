//! Infrastructure layer: process-local storage for the catalog.

pub mod product_store;

pub use product_store::{InMemoryProductStore, ProductStore};
