use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductFilter, UpdateProduct};

/// Repository trait for product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create a new product, returning it with its assigned id
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Find a product by id
    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Find all products whose name matches exactly
    async fn find_by_name(&self, name: &str) -> ProductResult<Vec<Product>>;

    /// List products matching the filter, ordered by id
    async fn find_all(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;

    /// Replace an existing product
    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Product>;

    /// Delete a product by id, returning whether it existed
    async fn delete(&self, id: i32) -> ProductResult<bool>;

    /// Delete every product with the given name, returning how many were removed
    async fn delete_by_name(&self, name: &str) -> ProductResult<u64>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<i32, Product>>>,
    next_id: Arc<AtomicI32>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let product = Product {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
        };
        products.insert(id, product.clone());

        tracing::info!(product_id = id, "Created product");
        Ok(product)
    }

    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut matches: Vec<Product> = products
            .values()
            .filter(|product| product.name == name)
            .cloned()
            .collect();
        matches.sort_by_key(|product| product.id);

        Ok(matches)
    }

    async fn find_all(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let name_fragment = filter
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(str::to_lowercase);

        let mut matches: Vec<Product> = products
            .values()
            .filter(|product| {
                if let Some(ref fragment) = name_fragment {
                    if !product.name.to_lowercase().contains(fragment) {
                        return false;
                    }
                }
                if let Some(min_price) = filter.min_price {
                    if product.price < min_price {
                        return false;
                    }
                }
                if let Some(max_price) = filter.max_price {
                    if product.price > max_price {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect();
        matches.sort_by_key(|product| product.id);

        Ok(matches)
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let product = products.get_mut(&id).ok_or(ProductError::NotFound(id))?;
        product.name = input.name;
        product.description = input.description;
        product.price = input.price;
        let updated = product.clone();

        tracing::info!(product_id = id, "Updated product");
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let mut products = self.products.write().await;

        let existed = products.remove(&id).is_some();
        if existed {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(existed)
    }

    async fn delete_by_name(&self, name: &str) -> ProductResult<u64> {
        let mut products = self.products.write().await;

        let ids: Vec<i32> = products
            .values()
            .filter(|product| product.name == name)
            .map(|product| product.id)
            .collect();
        for id in &ids {
            products.remove(id);
        }

        if !ids.is_empty() {
            tracing::info!(name, count = ids.len(), "Deleted products by name");
        }
        Ok(ids.len() as u64)
    }
}
