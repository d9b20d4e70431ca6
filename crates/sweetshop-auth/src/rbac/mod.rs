//! Role requirements checked at the top of protected operations.

pub mod guard;

pub use guard::{require_admin, require_authenticated};
