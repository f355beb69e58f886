//! # cloudnest-database
//!
//! Persistence layer for CloudNest: the [`store::NodeStore`] trait, its
//! PostgreSQL implementation, connection pool management, and the
//! migration runner.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use store::NodeStore;
