//! # cloudnest-auth
//!
//! Identity provider client. CloudNest does not verify credentials itself;
//! it forwards the caller's bearer token to the external provider and
//! trusts the owner id that comes back as the sole tenancy boundary.

pub mod identity;

pub use identity::HttpIdentityProvider;
