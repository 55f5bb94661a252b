use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

pub type ProductResult<T> = Result<T, ProductError>;

/// Domain errors for product operations
#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product with id '{0}' was not found.")]
    NotFound(i32),

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => AppError::NotFound(err.to_string()),
            ProductError::Validation(message) => AppError::BadRequest(message),
            ProductError::Database(db_err) => {
                tracing::error!(error = %db_err, "Database operation failed");
                AppError::InternalServerError("A database error occurred".to_string())
            }
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
