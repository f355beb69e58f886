//! # cloudnest-entity
//!
//! Domain entity models for CloudNest. A single entity, [`node::Node`],
//! represents both files and folders in the hierarchy.

pub mod node;

pub use node::{CreateNode, Node, NodePatch};
