//! Blob store provider implementations.

pub mod cdn;
pub mod local;

pub use cdn::CdnBlobStore;
pub use local::LocalBlobStore;
