//! # Postforge Core
//!
//! The domain layer of Postforge.
//! Turns a free-text prompt into a social-media post by driving the text and
//! image agents through the `ProviderGateway` port, then keeps the result in a
//! `PostStore`. No HTTP or filesystem code lives here.

pub mod agents;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{DomainError, ProviderError, StoreError};
pub use service::PostService;
