//! Product Service - Business logic layer

use std::sync::Arc;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service providing business logic operations.
///
/// Currently delegates every operation to the repository. The layer stays
/// separate so resource-specific rules can slot in without touching the
/// handlers, mirroring the password handling in the user service.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all products
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Get a product by id
    pub async fn get_product(&self, id: i64) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Create a new product
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        let product = Product {
            id: 0,
            name: input.name,
            price: input.price,
        };

        self.repository.create(product).await
    }

    /// Replace an existing product
    pub async fn update_product(&self, id: i64, input: UpdateProduct) -> ProductResult<Product> {
        let product = Product {
            id,
            name: input.name,
            price: input.price,
        };

        self.repository
            .update(id, product)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Delete a product
    pub async fn delete_product(&self, id: i64) -> ProductResult<()> {
        if !self.repository.delete(id).await? {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
