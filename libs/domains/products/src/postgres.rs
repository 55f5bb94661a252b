use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entity::{ActiveModel, Column, Entity};
use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductFilter, UpdateProduct};
use crate::repository::ProductRepository;

/// PostgreSQL implementation of ProductRepository
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    /// Create a new PostgreSQL product repository
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let active_model: ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_name(&self, name: &str) -> ProductResult<Vec<Product>> {
        let models = Entity::find()
            .filter(Column::Name.eq(name))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_all(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let mut query = Entity::find();

        if let Some(name) = filter.name.filter(|name| !name.is_empty()) {
            query = query.filter(Expr::col(Column::Name).ilike(format!("%{}%", name)));
        }

        if let Some(min_price) = filter.min_price {
            query = query.filter(Column::Price.gte(min_price));
        }

        if let Some(max_price) = filter.max_price {
            query = query.filter(Column::Price.lte(max_price));
        }

        let models = query.order_by_asc(Column::Id).all(&self.db).await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        let existing = Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        let mut model: ActiveModel = existing.into();
        model.name = Set(input.name);
        model.description = Set(input.description);
        model.price = Set(input.price);

        let updated = model.update(&self.db).await?;

        tracing::info!(product_id = id, "Updated product");
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let result = Entity::delete_by_id(id).exec(&self.db).await?;
        let deleted = result.rows_affected > 0;

        if deleted {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(deleted)
    }

    async fn delete_by_name(&self, name: &str) -> ProductResult<u64> {
        let result = Entity::delete_many()
            .filter(Column::Name.eq(name))
            .exec(&self.db)
            .await?;

        if result.rows_affected > 0 {
            tracing::info!(name, count = result.rows_affected, "Deleted products by name");
        }
        Ok(result.rows_affected)
    }
}
