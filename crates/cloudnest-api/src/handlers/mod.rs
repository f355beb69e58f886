//! HTTP request handlers.

pub mod ai;
pub mod folder;
pub mod health;
pub mod node;
