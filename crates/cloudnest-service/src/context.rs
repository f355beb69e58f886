//! Request context carrying the verified caller identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Context for the current authenticated request.
///
/// The owner id comes from the identity provider and is threaded
/// explicitly through every service call; it is the sole tenancy
/// boundary, never read from ambient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The verified opaque owner id.
    pub owner_id: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(owner_id: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            request_time: Utc::now(),
        }
    }
}
