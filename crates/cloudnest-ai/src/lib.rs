//! # cloudnest-ai
//!
//! Client for the external generative API: best-effort image captioning
//! and prompt-based image generation.

pub mod client;

pub use client::GenAiClient;
