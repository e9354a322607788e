//! Provider gateway port - abstraction over text and image generation services.

use std::fmt;

use async_trait::async_trait;

use crate::error::ProviderError;

/// Options for a text generation call. `None` fields use the provider defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextGenerationOptions {
    /// Output randomness (provider default 0.7).
    pub temperature: Option<f32>,
    /// Output length cap in tokens (provider default 1000).
    pub max_tokens: Option<u32>,
    pub model: Option<String>,
    /// System instruction sent ahead of the prompt.
    pub system: Option<String>,
}

/// Supported image resolutions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageSize {
    Square256,
    Square512,
    /// Largest square resolution.
    #[default]
    Square1024,
    Landscape1792x1024,
    Portrait1024x1792,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Square256 => "256x256",
            ImageSize::Square512 => "512x512",
            ImageSize::Square1024 => "1024x1024",
            ImageSize::Landscape1792x1024 => "1792x1024",
            ImageSize::Portrait1024x1792 => "1024x1792",
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Image quality tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageQuality {
    #[default]
    Standard,
    High,
}

impl ImageQuality {
    /// Wire name used by the image API.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageQuality::Standard => "standard",
            ImageQuality::High => "hd",
        }
    }
}

/// Options for an image generation call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageGenerationOptions {
    pub size: ImageSize,
    pub quality: ImageQuality,
    pub model: Option<String>,
}

/// Provider gateway trait - the single choke point for outbound generation calls.
///
/// Implementations make exactly one attempt per call and keep no state
/// between calls.
#[async_trait]
pub trait ProviderGateway: Send + Sync {
    /// Generate text for a prompt.
    async fn generate_text(
        &self,
        prompt: &str,
        options: &TextGenerationOptions,
    ) -> Result<String, ProviderError>;

    /// Generate an image, returned as a `data:image/png;base64,...` URI.
    async fn generate_image(
        &self,
        prompt: &str,
        options: &ImageGenerationOptions,
    ) -> Result<String, ProviderError>;
}
