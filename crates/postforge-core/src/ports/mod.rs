//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod provider;
mod research;
mod store;

pub use provider::{
    ImageGenerationOptions, ImageQuality, ImageSize, ProviderGateway, TextGenerationOptions,
};
pub use research::{ResearchData, ResearchError, ResearchSource};
pub use store::{DEFAULT_POST_CAPACITY, InsertOutcome, PostStore};
