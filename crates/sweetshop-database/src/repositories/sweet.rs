//! Sweet repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use sweetshop_core::error::{AppError, ErrorKind};
use sweetshop_core::result::AppResult;
use sweetshop_core::types::SweetId;
use sweetshop_entity::sweet::{NewSweet, Sweet, SweetFilter};

use crate::store::{PurchaseOutcome, SweetStore};

/// Postgres-backed catalog store.
#[derive(Debug, Clone)]
pub struct SweetRepository {
    pool: PgPool,
}

impl SweetRepository {
    /// Create a new sweet repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn exists(&self, id: SweetId) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM sweets WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to look up sweet", e))
    }
}

#[async_trait]
impl SweetStore for SweetRepository {
    async fn search(&self, filter: &SweetFilter) -> AppResult<Vec<Sweet>> {
        let query = match filter {
            SweetFilter::Name(name) => {
                sqlx::query_as::<_, Sweet>(
                    "SELECT * FROM sweets WHERE name ILIKE '%' || $1 || '%' ORDER BY id",
                )
                .bind(escape_like(name))
            }
            SweetFilter::Category(category) => sqlx::query_as::<_, Sweet>(
                "SELECT * FROM sweets WHERE LOWER(category) = LOWER($1) ORDER BY id",
            )
            .bind(category.clone()),
            SweetFilter::Price(range) => sqlx::query_as::<_, Sweet>(
                "SELECT * FROM sweets WHERE price BETWEEN $1 AND $2 ORDER BY id",
            )
            .bind(range.min)
            .bind(range.max),
            SweetFilter::All => sqlx::query_as::<_, Sweet>("SELECT * FROM sweets ORDER BY id"),
        };

        query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search sweets", e))
    }

    async fn create(&self, data: &NewSweet) -> AppResult<Sweet> {
        sqlx::query_as::<_, Sweet>(
            "INSERT INTO sweets (name, category, price, quantity, image_url, description) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.category)
        .bind(data.price)
        .bind(data.quantity)
        .bind(&data.image_url)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create sweet", e))
    }

    async fn update(&self, id: SweetId, data: &NewSweet) -> AppResult<Option<Sweet>> {
        sqlx::query_as::<_, Sweet>(
            "UPDATE sweets SET name = $2, category = $3, price = $4, quantity = $5, \
                               image_url = $6, description = $7 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.category)
        .bind(data.price)
        .bind(data.quantity)
        .bind(&data.image_url)
        .bind(&data.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update sweet", e))
    }

    async fn delete(&self, id: SweetId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM sweets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete sweet", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn decrement_quantity(&self, id: SweetId) -> AppResult<PurchaseOutcome> {
        let updated = sqlx::query_as::<_, Sweet>(
            "UPDATE sweets SET quantity = quantity - 1 \
             WHERE id = $1 AND quantity > 0 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to purchase sweet", e))?;

        match updated {
            Some(sweet) => Ok(PurchaseOutcome::Purchased(sweet)),
            None if self.exists(id).await? => Ok(PurchaseOutcome::OutOfStock),
            None => Ok(PurchaseOutcome::Missing),
        }
    }
}

/// Escape `%`, `_` and `\` so user input is matched literally by `ILIKE`.
fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
