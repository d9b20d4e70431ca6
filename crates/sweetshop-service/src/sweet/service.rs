//! Catalog use cases.

use std::sync::Arc;

use tracing::info;

use sweetshop_auth::identity::Identity;
use sweetshop_auth::rbac::{require_admin, require_authenticated};
use sweetshop_core::error::AppError;
use sweetshop_core::result::AppResult;
use sweetshop_core::types::SweetId;
use sweetshop_database::store::{PurchaseOutcome, SweetStore};
use sweetshop_entity::sweet::{NewSweet, Sweet, SweetFilter};

use super::validation::validate_sweet;

/// Message returned when a purchase finds no stock left.
pub const OUT_OF_STOCK: &str = "Sweet out of stock";

/// Browsing is public; changes need `ADMIN`; purchases need any identity.
#[derive(Debug, Clone)]
pub struct SweetService {
    /// Catalog store.
    sweets: Arc<dyn SweetStore>,
}

impl SweetService {
    /// Creates a new sweet service.
    pub fn new(sweets: Arc<dyn SweetStore>) -> Self {
        Self { sweets }
    }

    /// Every sweet, ordered by id.
    pub async fn list(&self) -> AppResult<Vec<Sweet>> {
        self.sweets.search(&SweetFilter::All).await
    }

    /// Sweets matching a single filter.
    pub async fn search(&self, filter: &SweetFilter) -> AppResult<Vec<Sweet>> {
        self.sweets.search(filter).await
    }

    /// Adds a sweet to the catalog.
    pub async fn add(&self, identity: Option<&Identity>, data: NewSweet) -> AppResult<Sweet> {
        let admin = require_admin(identity)?;
        validate_sweet(&data)?;

        let sweet = self.sweets.create(&data).await?;
        info!(sweet_id = %sweet.id, by = %admin.email, "Sweet added");
        Ok(sweet)
    }

    /// Replaces every editable field of an existing sweet.
    pub async fn update(
        &self,
        identity: Option<&Identity>,
        id: SweetId,
        data: NewSweet,
    ) -> AppResult<Sweet> {
        let admin = require_admin(identity)?;
        validate_sweet(&data)?;

        let sweet = self
            .sweets
            .update(id, &data)
            .await?
            .ok_or_else(|| sweet_not_found(id))?;
        info!(sweet_id = %id, by = %admin.email, "Sweet updated");
        Ok(sweet)
    }

    /// Removes a sweet from the catalog.
    pub async fn delete(&self, identity: Option<&Identity>, id: SweetId) -> AppResult<()> {
        let admin = require_admin(identity)?;

        if !self.sweets.delete(id).await? {
            return Err(sweet_not_found(id));
        }
        info!(sweet_id = %id, by = %admin.email, "Sweet deleted");
        Ok(())
    }

    /// Takes one unit out of stock.
    pub async fn purchase(&self, identity: Option<&Identity>, id: SweetId) -> AppResult<Sweet> {
        let buyer = require_authenticated(identity)?;

        match self.sweets.decrement_quantity(id).await? {
            PurchaseOutcome::Purchased(sweet) => {
                info!(
                    sweet_id = %id,
                    by = %buyer.email,
                    remaining = sweet.quantity,
                    "Sweet purchased"
                );
                Ok(sweet)
            }
            PurchaseOutcome::OutOfStock => Err(AppError::conflict(OUT_OF_STOCK)),
            PurchaseOutcome::Missing => Err(sweet_not_found(id)),
        }
    }
}

fn sweet_not_found(id: SweetId) -> AppError {
    AppError::not_found(format!("Sweet {id} not found"))
}
