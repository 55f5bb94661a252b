//! PostgreSQL connectivity for the catalog services.
//!
//! Wraps SeaORM connection setup with pool defaults, startup retry with
//! exponential backoff, and a generic migration runner.
//!
//! # Example
//!
//! ```ignore
//! use database::postgres;
//! use migration::Migrator;
//!
//! let db = postgres::connect_with_retry(&db_url, None).await?;
//! postgres::run_migrations::<Migrator>(&db, "catalog_api").await?;
//! ```

pub mod error;
pub mod postgres;
pub mod retry;

pub use error::{DatabaseError, DatabaseResult};
pub use retry::RetryConfig;
