use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{ApplyDiscount, CreateProduct, Product, ProductFilter, UpdateProduct};
use crate::repository::ProductRepository;

/// Service layer for product business logic
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product with validation
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Get a product by id
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Find all products whose name matches exactly
    pub async fn find_products_by_name(&self, name: &str) -> ProductResult<Vec<Product>> {
        self.repository.find_by_name(name).await
    }

    /// List products with optional filters
    pub async fn list_products(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        self.repository.find_all(filter).await
    }

    /// Replace a product with the given payload
    #[instrument(skip(self, input), fields(product_id = %id))]
    pub async fn update_product(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    /// Delete a product by id; succeeds even when the product is already gone
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            tracing::debug!(product_id = id, "Product already absent");
        }
        Ok(())
    }

    /// Delete every product with the given name; succeeds even when none match
    #[instrument(skip(self), fields(product_name = %name))]
    pub async fn delete_products_by_name(&self, name: &str) -> ProductResult<()> {
        let removed = self.repository.delete_by_name(name).await?;

        tracing::info!(count = removed, "Deleted products by name");
        Ok(())
    }

    /// Apply a percentage discount to a product's price
    ///
    /// The new price is `price - price * percentage / 100`, rounded to two
    /// decimal places with banker's rounding.
    #[instrument(skip(self, input), fields(product_id = %id))]
    pub async fn apply_discount(&self, id: i32, input: ApplyDiscount) -> ProductResult<Product> {
        let product = self.get_product(id).await?;

        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        let discount_amount = (product.price * input.discount_percentage) / Decimal::ONE_HUNDRED;
        let new_price = (product.price - discount_amount).round_dp(2);

        self.repository
            .update(
                id,
                UpdateProduct {
                    name: product.name,
                    description: product.description,
                    price: new_price,
                },
            )
            .await
    }
}
