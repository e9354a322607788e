//! # Postforge Shared
//!
//! Request and response envelopes exchanged with HTTP clients.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
