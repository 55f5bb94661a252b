use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    IdPath, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ProductError, ProductResult};
use crate::models::{
    ApplyDiscount, CreateProduct, DeleteByName, Product, ProductFilter, UpdateProduct,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

const TAG: &str = "products";

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        delete_products_by_name,
        get_product,
        update_product,
        delete_product,
        find_products_by_name,
        apply_discount,
    ),
    components(
        schemas(Product, CreateProduct, UpdateProduct, ApplyDiscount, ProductFilter),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the product router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/",
            get(list_products)
                .post(create_product)
                .delete(delete_products_by_name),
        )
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/name/{name}", get(find_products_by_name))
        .route("/{id}/discount", post(apply_discount))
        .with_state(shared_service)
}

/// List products with optional filters
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(ProductFilter),
    responses(
        (status = 200, description = "List of products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(filter): Query<ProductFilter>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_products(filter).await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = Product,
            headers(("Location" = String, description = "URL of the created product"))),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    let location = format!("/api/products/{}", product.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    ))
}

/// Delete every product with the given name
#[utoipa::path(
    delete,
    path = "",
    tag = TAG,
    params(DeleteByName),
    responses(
        (status = 204, description = "Matching products deleted"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_products_by_name<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(params): Query<DeleteByName>,
) -> ProductResult<StatusCode> {
    let name = match params.name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => {
            return Err(ProductError::Validation(
                "Name must be specified for deletion".to_string(),
            ));
        }
    };

    service.delete_products_by_name(name).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Replace a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> ProductResult<Json<Product>> {
    let product = service.update_product(id, input).await?;
    Ok(Json(product))
}

/// Delete a product; succeeds even when the product does not exist
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, response = BadRequestIdResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<StatusCode> {
    service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Find products by exact name
#[utoipa::path(
    get,
    path = "/name/{name}",
    tag = TAG,
    params(
        ("name" = String, Path, description = "Exact product name")
    ),
    responses(
        (status = 200, description = "Products with the given name", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn find_products_by_name<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(name): Path<String>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.find_products_by_name(&name).await?;
    Ok(Json(products))
}

/// Apply a percentage discount to a product's price
#[utoipa::path(
    post,
    path = "/{id}/discount",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    request_body = ApplyDiscount,
    responses(
        (status = 200, description = "Discount applied", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn apply_discount<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<ApplyDiscount>,
) -> ProductResult<Json<Product>> {
    let product = service.apply_discount(id, input).await?;
    Ok(Json(product))
}
