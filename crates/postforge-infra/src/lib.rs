//! # Postforge Infrastructure
//!
//! Concrete implementations of the ports defined in `postforge-core`.
//! This crate contains the provider client, post stores, and research backends.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No HTTP client; stores and no-op research only
//! - `openai` - OpenAI-compatible text and image generation via reqwest

pub mod research;
pub mod store;

#[cfg(feature = "openai")]
pub mod provider;

// Re-exports
pub use research::NoopResearch;
pub use store::{FilePostStore, InMemoryPostStore};

#[cfg(feature = "openai")]
pub use provider::{OpenAiConfig, OpenAiGateway};
