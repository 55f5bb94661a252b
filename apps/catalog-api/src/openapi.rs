//! Top-level OpenAPI document served by the docs UIs.

use utoipa::OpenApi;

/// App-wide doc: global info plus the products domain nested at its prefix.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Product catalog REST API with CRUD, search and percentage discounts",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc)
    ),
    tags(
        (name = "products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;
