//! Core type definitions used across the CloudNest workspace.

pub mod filter;

pub use filter::{NavigationIntent, NodeFilter};
