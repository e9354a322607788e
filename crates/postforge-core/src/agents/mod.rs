//! Content generation agents.
//!
//! Each agent wraps the `ProviderGateway` with its own prompt template and
//! failure policy: text failures propagate, image failures degrade to a
//! placeholder, research failures leave the prompt untouched.

mod image;
mod research;
mod text;

pub use image::{GeneratedImage, ImageAgent, PLACEHOLDER_IMAGE};
pub use research::ResearchAgent;
pub use text::{CREATIVE_POST, TextAgent, UNTITLED_POST, parse_response};
