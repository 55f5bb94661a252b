//! Integration tests for the Products domain
//!
//! These tests use real PostgreSQL via testcontainers to ensure:
//! - Database queries work correctly
//! - Filters translate to the right SQL
//! - Deletes report affected rows accurately
//! - Concurrent operations are handled properly

use domain_products::*;
use rust_decimal::Decimal;
use std::collections::HashSet;
use test_utils::{TestDatabase, TestDataBuilder, assertions::*};

fn new_product(name: String, description: Option<&str>, price: &str) -> CreateProduct {
    CreateProduct {
        name,
        description: description.map(str::to_string),
        price: price.parse::<Decimal>().unwrap(),
    }
}

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_find_product() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_and_find");

    let input = new_product(
        builder.name("widget", "main"),
        Some("Integration test widget"),
        "129.99",
    );

    let created = repo.create(input.clone()).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(created.name, input.name);
    assert_eq!(created.description.as_deref(), Some("Integration test widget"));
    assert_decimal_eq(created.price, "129.99", "created price");

    let retrieved = repo.find_by_id(created.id).await.unwrap();
    let retrieved = assert_some(retrieved, "product should exist");

    assert_eq!(retrieved.id, created.id);
    assert_eq!(retrieved.name, created.name);
    assert_decimal_eq(retrieved.price, "129.99", "retrieved price");
}

#[tokio::test]
async fn test_update_product_replaces_all_fields() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("update_replaces");

    let created = repo
        .create(new_product(
            builder.name("widget", "before"),
            Some("Original description"),
            "10.00",
        ))
        .await
        .unwrap();

    let updated = repo
        .update(
            created.id,
            UpdateProduct {
                name: builder.name("widget", "after"),
                description: None,
                price: "20.00".parse().unwrap(),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, builder.name("widget", "after"));
    assert_eq!(updated.description, None);
    assert_decimal_eq(updated.price, "20.00", "updated price");
}

#[tokio::test]
async fn test_update_missing_product_returns_not_found() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let result = repo
        .update(
            999_999,
            UpdateProduct {
                name: "ghost".to_string(),
                description: None,
                price: "1.00".parse().unwrap(),
            },
        )
        .await;

    assert!(matches!(result, Err(ProductError::NotFound(999_999))));
}

#[tokio::test]
async fn test_delete_product_reports_existence() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("delete_reports");

    let created = repo
        .create(new_product(builder.name("widget", "doomed"), None, "5.00"))
        .await
        .unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());

    let retrieved = repo.find_by_id(created.id).await.unwrap();
    assert!(retrieved.is_none());
}

#[tokio::test]
async fn test_delete_by_name_removes_all_matches() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("delete_by_name");

    let shared_name = builder.name("mug", "shared");
    repo.create(new_product(shared_name.clone(), None, "5.00"))
        .await
        .unwrap();
    repo.create(new_product(shared_name.clone(), None, "6.00"))
        .await
        .unwrap();
    repo.create(new_product(builder.name("plate", "single"), None, "7.00"))
        .await
        .unwrap();

    let removed = repo.delete_by_name(&shared_name).await.unwrap();
    assert_eq!(removed, 2);

    // Deleting again removes nothing
    let removed = repo.delete_by_name(&shared_name).await.unwrap();
    assert_eq!(removed, 0);

    let remaining = repo.find_all(ProductFilter::default()).await.unwrap();
    assert_eq!(remaining.len(), 1);
}

#[tokio::test]
async fn test_find_by_name_matches_exactly() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("find_by_name");

    let exact = builder.name("mug", "exact");
    repo.create(new_product(exact.clone(), None, "5.00"))
        .await
        .unwrap();
    repo.create(new_product(format!("{exact}-pro"), None, "15.00"))
        .await
        .unwrap();

    let found = repo.find_by_name(&exact).await.unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, exact);
}

#[tokio::test]
async fn test_find_all_with_filters() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("find_all_filters");

    repo.create(new_product(builder.name("widget", "small"), None, "5.00"))
        .await
        .unwrap();
    repo.create(new_product(builder.name("widget", "large"), None, "50.00"))
        .await
        .unwrap();
    repo.create(new_product(builder.name("gadget", "one"), None, "500.00"))
        .await
        .unwrap();

    // Partial name match is case-insensitive
    let filter = ProductFilter {
        name: Some("WIDGET".to_string()),
        ..Default::default()
    };
    let widgets = repo.find_all(filter).await.unwrap();
    assert_eq!(widgets.len(), 2);

    // Price bounds are inclusive
    let filter = ProductFilter {
        min_price: Some("5.00".parse().unwrap()),
        max_price: Some("50.00".parse().unwrap()),
        ..Default::default()
    };
    let in_range = repo.find_all(filter).await.unwrap();
    assert_eq!(in_range.len(), 2);

    // An empty name filter is ignored
    let filter = ProductFilter {
        name: Some(String::new()),
        ..Default::default()
    };
    let all = repo.find_all(filter).await.unwrap();
    assert_eq!(all.len(), 3);

    // Results come back ordered by id
    let ids: Vec<i32> = all.iter().map(|p| p.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

// ============================================================================
// Service Tests
// ============================================================================

#[tokio::test]
async fn test_service_applies_and_persists_discount() {
    let db = TestDatabase::new().await;
    let service = ProductService::new(PgProductRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("persists_discount");

    let created = service
        .create_product(new_product(
            builder.name("television", "main"),
            None,
            "1000.00",
        ))
        .await
        .unwrap();

    let discounted = service
        .apply_discount(
            created.id,
            ApplyDiscount {
                discount_percentage: Decimal::from(20),
            },
        )
        .await
        .unwrap();
    assert_decimal_eq(discounted.price, "800.00", "discounted price");

    // The new price survives a round trip through the database
    let retrieved = service.get_product(created.id).await.unwrap();
    assert_decimal_eq(retrieved.price, "800.00", "persisted price");
}

#[tokio::test]
async fn test_service_rejects_invalid_create() {
    let db = TestDatabase::new().await;
    let service = ProductService::new(PgProductRepository::new(db.connection()));

    let result = service
        .create_product(new_product(String::new(), None, "9.99"))
        .await;
    assert!(matches!(result, Err(ProductError::Validation(_))));

    // Nothing was written
    let all = service.list_products(ProductFilter::default()).await.unwrap();
    assert!(all.is_empty());
}

// ============================================================================
// Concurrent Operations Tests
// ============================================================================

#[tokio::test]
async fn test_concurrent_creates_assign_distinct_ids() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("concurrent");

    let mut handles = vec![];
    for i in 0..5 {
        let repo_clone = PgProductRepository::new(db.connection());
        let name = builder.name("widget", &format!("concurrent-{}", i));

        let handle = tokio::spawn(async move {
            repo_clone
                .create(new_product(name, None, "9.99"))
                .await
        });

        handles.push(handle);
    }

    let results: Vec<_> = futures::future::join_all(handles)
        .await
        .into_iter()
        .map(|r| r.unwrap())
        .collect();

    let ids: HashSet<i32> = results
        .into_iter()
        .map(|result| result.unwrap().id)
        .collect();
    assert_eq!(ids.len(), 5, "every create should get its own id");

    let all = repo.find_all(ProductFilter::default()).await.unwrap();
    assert_eq!(all.len(), 5, "all products should be created");
}
