//! Custom Axum extractors.

pub mod identity;
pub mod path;
pub mod validated;

pub use identity::CurrentIdentity;
pub use path::SweetPath;
pub use validated::ValidatedJson;
