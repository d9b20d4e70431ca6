//! In-memory store implementations backed by `DashMap`.
//!
//! Used by the test suites, which run without a database.

pub mod sweet;
pub mod user;

pub use sweet::MemorySweetStore;
pub use user::MemoryUserStore;
