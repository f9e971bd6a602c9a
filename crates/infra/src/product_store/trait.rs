use std::sync::Arc;

use chrono::{DateTime, Utc};

use catalogo_core::{DomainResult, ProductId};
use catalogo_products::{ListQuery, Product, ProductFields};

/// Catalog storage operations.
///
/// Every mutation is applied atomically with respect to other calls on the same
/// store. Lookups by an unknown id return `DomainError::NotFound`, except
/// `delete`, which reports whether anything was removed instead.
pub trait ProductStore: Send + Sync {
    /// Assign the next id and store a new record.
    fn create(&self, fields: ProductFields, data_cadastro: DateTime<Utc>) -> DomainResult<Product>;

    /// Remove the record if present. `Ok(false)` when nothing matched.
    fn delete(&self, id: ProductId) -> DomainResult<bool>;

    /// Snapshot of the catalog run through the listing pipeline.
    fn list(&self, query: &ListQuery) -> DomainResult<Vec<Product>>;

    fn get(&self, id: ProductId) -> DomainResult<Product>;

    /// Full replace keeping `id` and `dataCadastro`.
    fn replace(&self, id: ProductId, fields: ProductFields) -> DomainResult<Product>;

    /// An absent percentage leaves the price absent.
    fn reduce_price(&self, id: ProductId, percentual_reducao: Option<f64>) -> DomainResult<Product>;

    fn adjust_stock(&self, id: ProductId, quantidade: Option<i64>) -> DomainResult<Product>;
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn create(&self, fields: ProductFields, data_cadastro: DateTime<Utc>) -> DomainResult<Product> {
        (**self).create(fields, data_cadastro)
    }

    fn delete(&self, id: ProductId) -> DomainResult<bool> {
        (**self).delete(id)
    }

    fn list(&self, query: &ListQuery) -> DomainResult<Vec<Product>> {
        (**self).list(query)
    }

    fn get(&self, id: ProductId) -> DomainResult<Product> {
        (**self).get(id)
    }

    fn replace(&self, id: ProductId, fields: ProductFields) -> DomainResult<Product> {
        (**self).replace(id, fields)
    }

    fn reduce_price(&self, id: ProductId, percentual_reducao: Option<f64>) -> DomainResult<Product> {
        (**self).reduce_price(id, percentual_reducao)
    }

    fn adjust_stock(&self, id: ProductId, quantidade: Option<i64>) -> DomainResult<Product> {
        (**self).adjust_stock(id, quantidade)
    }
}
