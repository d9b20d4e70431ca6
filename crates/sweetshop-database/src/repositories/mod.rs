//! PostgreSQL implementations of the store traits.

pub mod sweet;
pub mod user;

pub use sweet::SweetRepository;
pub use user::UserRepository;
