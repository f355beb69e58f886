//! Trait seams for CloudNest's external collaborators.
//!
//! Each trait is defined here in `cloudnest-core` and implemented in the
//! crate that owns the concern (`cloudnest-storage`, `cloudnest-auth`,
//! `cloudnest-ai`). Keeping the seams in one dependency-free crate lets the
//! service layer be tested against in-memory doubles.

pub mod blob;
pub mod caption;
pub mod identity;

pub use blob::{BlobHandle, BlobStore};
pub use caption::Captioner;
pub use identity::IdentityProvider;
