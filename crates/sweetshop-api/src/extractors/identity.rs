//! `CurrentIdentity` extractor: the identity the auth gate attached, if any.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use sweetshop_auth::identity::Identity;

/// Request-scoped identity. `None` means the caller is anonymous.
///
/// Never rejects; handlers pass the option to the service, whose guards
/// decide between 401 and 403.
#[derive(Debug, Clone, Default)]
pub struct CurrentIdentity(pub Option<Identity>);

impl CurrentIdentity {
    /// Borrow the identity for a service call.
    pub fn identity(&self) -> Option<&Identity> {
        self.0.as_ref()
    }
}

impl<S> FromRequestParts<S> for CurrentIdentity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(parts.extensions.get::<Identity>().cloned()))
    }
}
