//! # cloudnest-api
//!
//! HTTP API layer for CloudNest built on Axum.
//!
//! Provides the REST endpoints over the node tree, the bearer-token auth
//! extractor, DTOs, and the `AppError` to HTTP status mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
