use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use catalogo_core::{DomainError, DomainResult, ProductId};
use catalogo_products::{ListQuery, Product, ProductFields};

use super::r#trait::ProductStore;

#[derive(Debug)]
struct Catalog {
    // Ids are handed out in increasing order, so key order is insertion order.
    products: BTreeMap<ProductId, Product>,
    next_id: u64,
}

/// In-memory catalog: an ordered id → record map plus the next-id counter.
///
/// Both live behind one lock so id assignment and insertion are a single step.
#[derive(Debug)]
pub struct InMemoryProductStore {
    inner: RwLock<Catalog>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Catalog {
                products: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, Catalog>> {
        self.inner
            .read()
            .map_err(|_| DomainError::processing("product store lock poisoned"))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, Catalog>> {
        self.inner
            .write()
            .map_err(|_| DomainError::processing("product store lock poisoned"))
    }

    fn update<F>(&self, id: ProductId, f: F) -> DomainResult<Product>
    where
        F: FnOnce(&mut Product) -> DomainResult<()>,
    {
        let mut catalog = self.write()?;
        let product = catalog.products.get_mut(&id).ok_or_else(DomainError::not_found)?;
        f(product)?;
        Ok(product.clone())
    }
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductStore for InMemoryProductStore {
    fn create(&self, fields: ProductFields, data_cadastro: DateTime<Utc>) -> DomainResult<Product> {
        let mut catalog = self.write()?;

        let id = ProductId::new(catalog.next_id);
        catalog.next_id = catalog
            .next_id
            .checked_add(1)
            .ok_or_else(|| DomainError::processing("product id space exhausted"))?;

        let product = Product::create(id, fields, data_cadastro);
        catalog.products.insert(id, product.clone());
        tracing::debug!(product_id = %id, "product stored");
        Ok(product)
    }

    fn delete(&self, id: ProductId) -> DomainResult<bool> {
        let mut catalog = self.write()?;
        Ok(catalog.products.remove(&id).is_some())
    }

    fn list(&self, query: &ListQuery) -> DomainResult<Vec<Product>> {
        let snapshot: Vec<Product> = {
            let catalog = self.read()?;
            catalog.products.values().cloned().collect()
        };
        Ok(query.apply(snapshot))
    }

    fn get(&self, id: ProductId) -> DomainResult<Product> {
        let catalog = self.read()?;
        catalog
            .products
            .get(&id)
            .cloned()
            .ok_or_else(DomainError::not_found)
    }

    fn replace(&self, id: ProductId, fields: ProductFields) -> DomainResult<Product> {
        self.update(id, |product| {
            *product = product.replaced_with(fields);
            Ok(())
        })
    }

    fn reduce_price(&self, id: ProductId, percentual_reducao: Option<f64>) -> DomainResult<Product> {
        self.update(id, |product| {
            product.reduce_price(percentual_reducao);
            Ok(())
        })
    }

    fn adjust_stock(&self, id: ProductId, quantidade: Option<i64>) -> DomainResult<Product> {
        self.update(id, |product| product.adjust_stock(quantidade))
    }
}
