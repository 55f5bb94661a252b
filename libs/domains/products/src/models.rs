use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// Product catalog entry exposed through the REST API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier assigned by the database
    pub id: i32,
    /// Product name
    pub name: String,
    /// Optional short description
    pub description: Option<String>,
    /// Unit price with two decimal places, never negative
    pub price: Decimal,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 63))]
    pub name: String,
    #[validate(length(max = 256))]
    pub description: Option<String>,
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
}

/// DTO for replacing an existing product (full payload, PUT semantics)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 63))]
    pub name: String,
    #[validate(length(max = 256))]
    pub description: Option<String>,
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
}

/// DTO for applying a percentage discount to a product's price
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ApplyDiscount {
    /// Percentage to take off the current price, between 0 and 100
    #[validate(custom(function = "validate_discount_percentage"))]
    pub discount_percentage: Decimal,
}

/// Query filters for listing products
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct ProductFilter {
    /// Case-insensitive substring match on the name
    pub name: Option<String>,
    /// Lower price bound (inclusive)
    pub min_price: Option<Decimal>,
    /// Upper price bound (inclusive)
    pub max_price: Option<Decimal>,
}

/// Query parameters for deleting products by name
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct DeleteByName {
    /// Exact name of the product(s) to delete
    pub name: Option<String>,
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price < Decimal::ZERO {
        let mut err = ValidationError::new("negative_price");
        err.message = Some("Price must not be negative.".into());
        return Err(err);
    }
    Ok(())
}

fn validate_discount_percentage(percentage: &Decimal) -> Result<(), ValidationError> {
    if *percentage < Decimal::ZERO || *percentage > Decimal::ONE_HUNDRED {
        let mut err = ValidationError::new("discount_percentage_range");
        err.message = Some("Discount percentage must be between 0 and 100.".into());
        return Err(err);
    }
    Ok(())
}
