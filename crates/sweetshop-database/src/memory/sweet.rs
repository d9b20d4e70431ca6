//! In-memory catalog store.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use sweetshop_core::result::AppResult;
use sweetshop_core::types::SweetId;
use sweetshop_entity::sweet::{NewSweet, Sweet, SweetFilter};

use crate::store::{PurchaseOutcome, SweetStore};

/// `DashMap`-backed sweet store.
///
/// Purchases hold the entry's shard lock while checking and decrementing,
/// so stock never drops below zero.
#[derive(Debug)]
pub struct MemorySweetStore {
    sweets: DashMap<SweetId, Sweet>,
    next_id: AtomicI64,
}

impl MemorySweetStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            sweets: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of sweets in the catalog.
    pub fn len(&self) -> usize {
        self.sweets.len()
    }
}

impl Default for MemorySweetStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SweetStore for MemorySweetStore {
    async fn search(&self, filter: &SweetFilter) -> AppResult<Vec<Sweet>> {
        let mut found: Vec<Sweet> = self
            .sweets
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        found.sort_by_key(|s| s.id);
        Ok(found)
    }

    async fn create(&self, data: &NewSweet) -> AppResult<Sweet> {
        let id = SweetId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let sweet = data.clone().into_sweet(id);
        self.sweets.insert(id, sweet.clone());
        Ok(sweet)
    }

    async fn update(&self, id: SweetId, data: &NewSweet) -> AppResult<Option<Sweet>> {
        Ok(self.sweets.get_mut(&id).map(|mut entry| {
            *entry = data.clone().into_sweet(id);
            entry.clone()
        }))
    }

    async fn delete(&self, id: SweetId) -> AppResult<bool> {
        Ok(self.sweets.remove(&id).is_some())
    }

    async fn decrement_quantity(&self, id: SweetId) -> AppResult<PurchaseOutcome> {
        let Some(mut entry) = self.sweets.get_mut(&id) else {
            return Ok(PurchaseOutcome::Missing);
        };
        if !entry.in_stock() {
            return Ok(PurchaseOutcome::OutOfStock);
        }
        entry.quantity -= 1;
        Ok(PurchaseOutcome::Purchased(entry.clone()))
    }
}
