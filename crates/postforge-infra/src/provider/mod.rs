//! Provider gateway implementations.

mod openai;

pub use openai::{
    API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL, OpenAiConfig,
    OpenAiGateway,
};
