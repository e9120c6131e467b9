use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::Product;

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for products.
/// Implementations can use different storage backends.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List all products, order unspecified
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by id
    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Store a new product under the next free id, returning the stored copy
    async fn create(&self, product: Product) -> ProductResult<Product>;

    /// Replace the product stored at `id`; `None` when the id is absent
    async fn update(&self, id: i64, product: Product) -> ProductResult<Option<Product>>;

    /// Delete a product by id; `false` when the id is absent
    async fn delete(&self, id: i64) -> ProductResult<bool>;
}

#[derive(Debug, Default)]
struct Store {
    products: HashMap<i64, Product>,
    last_id: i64,
}

/// In-memory implementation of ProductRepository.
///
/// The map and the id counter share one lock; ids are never reused within
/// the store's lifetime, even after deletes.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store.products.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn create(&self, mut product: Product) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        // The submitted id is ignored; the store assigns the next one
        store.last_id += 1;
        product.id = store.last_id;
        store.products.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, name = %product.name, "Created product");
        Ok(product)
    }

    async fn update(&self, id: i64, mut product: Product) -> ProductResult<Option<Product>> {
        let mut store = self.store.write().await;

        if !store.products.contains_key(&id) {
            return Ok(None);
        }

        product.id = id;
        store.products.insert(id, product.clone());

        tracing::info!(product_id = id, "Updated product");
        Ok(Some(product))
    }

    async fn delete(&self, id: i64) -> ProductResult<bool> {
        let mut store = self.store.write().await;

        if store.products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
