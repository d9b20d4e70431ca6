//! In-memory credential store.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use sweetshop_core::error::AppError;
use sweetshop_core::result::AppResult;
use sweetshop_core::types::UserId;
use sweetshop_entity::user::{CreateUser, User};

use crate::store::{DUPLICATE_EMAIL, UserStore};

/// `DashMap`-backed user store.
///
/// Emails are indexed lowercased; claiming the index entry is what makes
/// `create` atomic.
#[derive(Debug)]
pub struct MemoryUserStore {
    users: DashMap<UserId, User>,
    by_email: DashMap<String, UserId>,
    next_id: AtomicI64,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            by_email: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.users.len()
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let Some(id) = self.by_email.get(&email.to_lowercase()).map(|e| *e.value()) else {
            return Ok(None);
        };
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        match self.by_email.entry(data.email.to_lowercase()) {
            Entry::Occupied(_) => Err(AppError::conflict(DUPLICATE_EMAIL)),
            Entry::Vacant(slot) => {
                let id = UserId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
                let user = User {
                    id,
                    username: data.username.clone(),
                    email: data.email.clone(),
                    password_hash: data.password_hash.clone(),
                    role: data.role,
                    created_at: Utc::now(),
                };
                self.users.insert(id, user.clone());
                slot.insert(id);
                Ok(user)
            }
        }
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self.users.iter().map(|u| u.value().clone()).collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }
}
