//! # sweetshop-database
//!
//! PostgreSQL connection management, schema migrations, and the store
//! traits the service layer is written against. Each store has a
//! Postgres repository and an in-memory implementation.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::{MemorySweetStore, MemoryUserStore};
pub use repositories::{SweetRepository, UserRepository};
pub use store::{PurchaseOutcome, SweetStore, UserStore};
