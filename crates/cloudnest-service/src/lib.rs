//! # cloudnest-service
//!
//! Stateless business logic over the node store: the lifecycle state
//! machine (trash / restore / permanent delete / star), breadth-first
//! subtree traversal for cascading folder operations, the query surface,
//! and upload/create orchestration against the blob store and captioner.

pub mod context;
pub mod node;

pub use context::RequestContext;
