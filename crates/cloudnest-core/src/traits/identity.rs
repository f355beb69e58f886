//! Identity provider trait — the sole tenancy boundary.

use async_trait::async_trait;

use crate::result::AppResult;

/// Verifies a caller-supplied token and yields the opaque owner id.
///
/// CloudNest trusts the returned id completely; every store query and
/// mutation is scoped by it. Verification failure is `Unauthenticated`.
#[async_trait]
pub trait IdentityProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Verify a bearer token, returning the owner id it belongs to.
    async fn verify(&self, token: &str) -> AppResult<String>;
}
