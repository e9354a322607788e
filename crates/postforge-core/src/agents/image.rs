//! Image agent - illustrates a topic, degrading to a placeholder on failure.

use std::sync::Arc;

use crate::ports::{ImageGenerationOptions, ImageQuality, ImageSize, ProviderGateway};

/// Light grey 1024x1024 SVG reading "Image not available".
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iMTAyNCIgaGVpZ2h0PSIxMDI0IiB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciPjxyZWN0IHdpZHRoPSIxMDI0IiBoZWlnaHQ9IjEwMjQiIGZpbGw9IiNlMGUwZTAiLz48dGV4dCB4PSI1MCUiIHk9IjUwJSIgZm9udC1mYW1pbHk9IkFyaWFsIiBmb250LXNpemU9IjI0IiBmaWxsPSIjOTk5IiB0ZXh0LWFuY2hvcj0ibWlkZGxlIiBkeT0iLjNlbSI+SW1hZ2Ugbm90IGF2YWlsYWJsZTwvdGV4dD48L3N2Zz4=";

/// Result of an image agent run. Never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedImage {
    /// Data URI returned by the provider.
    Generated(String),
    /// Generation failed; `PLACEHOLDER_IMAGE` stands in.
    Placeholder,
}

impl GeneratedImage {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, GeneratedImage::Placeholder)
    }

    pub fn into_data_uri(self) -> String {
        match self {
            GeneratedImage::Generated(uri) => uri,
            GeneratedImage::Placeholder => PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct ImageAgent {
    gateway: Arc<dyn ProviderGateway>,
}

impl ImageAgent {
    pub fn new(gateway: Arc<dyn ProviderGateway>) -> Self {
        Self { gateway }
    }

    /// Generate an illustration for `prompt`.
    ///
    /// Gateway failures are logged and replaced by the placeholder so the
    /// post can still be created.
    pub async fn run(&self, prompt: &str) -> GeneratedImage {
        let image_prompt = build_image_prompt(prompt);
        let options = ImageGenerationOptions {
            size: ImageSize::Square1024,
            quality: ImageQuality::Standard,
            model: None,
        };

        match self.gateway.generate_image(&image_prompt, &options).await {
            Ok(uri) => GeneratedImage::Generated(uri),
            Err(e) => {
                tracing::warn!(error = %e, "Image generation failed, using placeholder");
                GeneratedImage::Placeholder
            }
        }
    }
}

fn build_image_prompt(prompt: &str) -> String {
    format!(
        "Create a professional, eye-catching social media post image about: {prompt}.\n\
         Style: modern, vibrant, high-quality, square, suitable for Instagram/Facebook.\n\
         No text in the image."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeGateway;

    #[tokio::test]
    async fn test_returns_provider_image() {
        let gateway = Arc::new(FakeGateway::with_text("unused").image("data:image/png;base64,AAAA"));
        let agent = ImageAgent::new(gateway.clone());

        let image = agent.run("sunsets").await;
        assert_eq!(image, GeneratedImage::Generated("data:image/png;base64,AAAA".into()));

        let (prompt, options) = gateway.last_image_call().unwrap();
        assert!(prompt.contains("about: sunsets."));
        assert!(prompt.contains("No text in the image."));
        assert_eq!(options.size, ImageSize::Square1024);
        assert_eq!(options.quality, ImageQuality::Standard);
    }

    #[tokio::test]
    async fn test_failure_degrades_to_placeholder() {
        let gateway = Arc::new(FakeGateway::failing());
        let agent = ImageAgent::new(gateway.clone());

        let image = agent.run("sunsets").await;
        assert!(image.is_placeholder());
        assert_eq!(image.into_data_uri(), PLACEHOLDER_IMAGE);
        assert_eq!(gateway.image_calls(), 1);
    }
}
