//! Product catalog domain: CRUD, name search, price filtering, and
//! percentage discounts.
//!
//! The crate is layered top to bottom: [`handlers`] expose the HTTP
//! surface (and the per-domain OpenAPI doc), [`service`] owns the
//! business rules, [`repository`] abstracts storage behind a trait with
//! a Postgres implementation in [`postgres`] and an in-memory one for
//! tests, and [`models`] / [`entity`] hold the DTOs and the SeaORM
//! mapping. Nothing above a layer touches anything below its direct
//! neighbor.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{
//!     handlers,
//!     repository::InMemoryProductRepository,
//!     service::ProductService,
//! };
//!
//! let repository = InMemoryProductRepository::new();
//! let service = ProductService::new(repository);
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{
    ApplyDiscount, CreateProduct, DeleteByName, Product, ProductFilter, UpdateProduct,
};
pub use postgres::PgProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
