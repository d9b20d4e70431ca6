//! Store traits implemented by the Postgres repositories and the in-memory stores.
//!
//! Uniqueness of emails and the stock check on purchase are enforced by the
//! store itself, so concurrent callers cannot race past them.

use async_trait::async_trait;

use sweetshop_core::result::AppResult;
use sweetshop_core::types::SweetId;
use sweetshop_entity::sweet::{NewSweet, Sweet, SweetFilter};
use sweetshop_entity::user::{CreateUser, User};

/// Message used for every duplicate-email conflict.
pub const DUPLICATE_EMAIL: &str = "Email already registered";

/// Credential store for user accounts.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a user.
    ///
    /// Fails with a `Conflict` error carrying [`DUPLICATE_EMAIL`] when the
    /// email is already taken.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// List all users ordered by id.
    async fn list(&self) -> AppResult<Vec<User>>;
}

/// Result of an atomic stock decrement.
#[derive(Debug, Clone, PartialEq)]
pub enum PurchaseOutcome {
    /// One unit was taken; carries the updated row.
    Purchased(Sweet),
    /// The sweet exists but its quantity is zero. Nothing changed.
    OutOfStock,
    /// No sweet with that id.
    Missing,
}

/// Catalog store.
#[async_trait]
pub trait SweetStore: Send + Sync + std::fmt::Debug + 'static {
    /// Sweets matching `filter`, ordered by id.
    async fn search(&self, filter: &SweetFilter) -> AppResult<Vec<Sweet>>;

    /// Insert a sweet and return it with its assigned id.
    async fn create(&self, data: &NewSweet) -> AppResult<Sweet>;

    /// Replace every editable field. Returns `None` if the id is unknown.
    async fn update(&self, id: SweetId, data: &NewSweet) -> AppResult<Option<Sweet>>;

    /// Delete a sweet. Returns `true` if a row was removed.
    async fn delete(&self, id: SweetId) -> AppResult<bool>;

    /// Take one unit out of stock if any is left.
    async fn decrement_quantity(&self, id: SweetId) -> AppResult<PurchaseOutcome>;
}
