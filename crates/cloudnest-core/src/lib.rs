//! # cloudnest-core
//!
//! Core crate for CloudNest. Contains trait seams for the blob store,
//! identity provider, and caption generator, plus configuration schemas,
//! shared types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other CloudNest crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
