//! Node entity: a file or folder record.

pub mod model;

pub use model::{CreateNode, Node, NodePatch};
