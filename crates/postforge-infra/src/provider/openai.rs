//! OpenAI-compatible provider gateway over the REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

use postforge_core::error::ProviderError;
use postforge_core::ports::{ImageGenerationOptions, ProviderGateway, TextGenerationOptions};

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TEXT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are an assistant specialized in creating creative content for social media.";

const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_MAX_TOKENS: u32 = 1000;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// OpenAI gateway configuration.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key. A missing key is reported when a call is attempted.
    pub api_key: Option<String>,
    pub base_url: String,
    pub text_model: String,
    pub image_model: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl OpenAiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()),
            base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            text_model: std::env::var("OPENAI_TEXT_MODEL")
                .unwrap_or_else(|_| DEFAULT_TEXT_MODEL.to_string()),
            image_model: std::env::var("OPENAI_IMAGE_MODEL")
                .unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string()),
            timeout: parse_timeout(std::env::var("PROVIDER_TIMEOUT_SECS").ok().as_deref()),
        }
    }
}

/// Timeout in whole seconds; unset or unparsable values use the default.
fn parse_timeout(secs: Option<&str>) -> Duration {
    secs.and_then(|s| s.trim().parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_TIMEOUT)
}

/// Gateway to OpenAI chat completions and image generation.
///
/// One attempt per call; no retries.
pub struct OpenAiGateway {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiGateway {
    pub fn new(config: OpenAiConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn from_env() -> Result<Self, ProviderError> {
        Self::new(OpenAiConfig::from_env())
    }

    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    fn api_key(&self) -> Result<&str, ProviderError> {
        self.config
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::Configuration(format!("{API_KEY_ENV} is not set")))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Response, ProviderError> {
        let api_key = self.api_key()?;

        let response = self
            .client
            .post(self.endpoint(path))
            .bearer_auth(api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(remote_error(response).await);
        }

        Ok(response)
    }
}

/// Build a `Remote` error from a failed response, preferring `error.message`.
async fn remote_error(response: Response) -> ProviderError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let message = serde_json::from_str::<ErrorEnvelope>(&body)
        .ok()
        .and_then(|e| e.error)
        .and_then(|e| e.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.to_string())
        });

    ProviderError::Remote {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl ProviderGateway for OpenAiGateway {
    async fn generate_text(
        &self,
        prompt: &str,
        options: &TextGenerationOptions,
    ) -> Result<String, ProviderError> {
        let model = options.model.as_deref().unwrap_or(&self.config.text_model);
        let request = ChatCompletionRequest {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: options.system.as_deref().unwrap_or(DEFAULT_SYSTEM_PROMPT),
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: options.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            max_tokens: options.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        };

        tracing::debug!(model, "Requesting text generation");

        let response: ChatCompletionResponse = self
            .post_json("chat/completions", &request)
            .await?
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| ProviderError::MalformedResponse("no completion text".to_string()))
    }

    async fn generate_image(
        &self,
        prompt: &str,
        options: &ImageGenerationOptions,
    ) -> Result<String, ProviderError> {
        let model = options.model.as_deref().unwrap_or(&self.config.image_model);
        let request = ImageRequest {
            model,
            prompt,
            n: 1,
            size: options.size.as_str(),
            quality: options.quality.as_str(),
            response_format: "b64_json",
        };

        tracing::debug!(model, size = %options.size, "Requesting image generation");

        let response: ImageResponse = self
            .post_json("images/generations", &request)
            .await?
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        let payload = response
            .data
            .into_iter()
            .next()
            .and_then(|d| d.b64_json)
            .filter(|b| !b.is_empty())
            .ok_or(ProviderError::MissingImage)?;

        Ok(format!("data:image/png;base64,{payload}"))
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Serialize)]
struct ImageRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u8,
    size: &'static str,
    quality: &'static str,
    response_format: &'static str,
}

#[derive(Deserialize)]
struct ImageResponse {
    #[serde(default)]
    data: Vec<ImageDatum>,
}

#[derive(Deserialize)]
struct ImageDatum {
    b64_json: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use postforge_core::ports::{ImageQuality, ImageSize};
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gateway_for(server: &MockServer) -> OpenAiGateway {
        OpenAiGateway::new(OpenAiConfig {
            api_key: Some("test-key".to_string()),
            base_url: server.uri(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_parse_timeout_falls_back_to_default() {
        assert_eq!(parse_timeout(None), DEFAULT_TIMEOUT);
        assert_eq!(parse_timeout(Some("soon")), DEFAULT_TIMEOUT);
        assert_eq!(parse_timeout(Some("15")), Duration::from_secs(15));
        assert_eq!(OpenAiConfig::default().timeout, Duration::from_secs(60));
    }

    #[tokio::test]
    async fn test_generate_text_sends_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "model": "gpt-4o-mini",
                "max_tokens": 1000,
                "messages": [
                    { "role": "system", "content": DEFAULT_SYSTEM_PROMPT },
                    { "role": "user", "content": "hello" }
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "role": "assistant", "content": "Hi there" } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = gateway_for(&server)
            .generate_text("hello", &TextGenerationOptions::default())
            .await
            .unwrap();
        assert_eq!(text, "Hi there");
    }

    #[tokio::test]
    async fn test_generate_text_overrides_options() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(json!({ "model": "custom-model", "max_tokens": 800 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "content": "ok" } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let options = TextGenerationOptions {
            max_tokens: Some(800),
            model: Some("custom-model".to_string()),
            ..Default::default()
        };
        let text = gateway_for(&server).generate_text("x", &options).await.unwrap();
        assert_eq!(text, "ok");
    }

    #[tokio::test]
    async fn test_remote_error_message_is_forwarded() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "error": { "message": "Rate limit reached", "type": "requests" }
            })))
            .mount(&server)
            .await;

        let err = gateway_for(&server)
            .generate_text("x", &TextGenerationOptions::default())
            .await
            .unwrap_err();

        match err {
            ProviderError::Remote { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "Rate limit reached");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_remote_error_without_body_uses_status_reason() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = gateway_for(&server)
            .generate_text("x", &TextGenerationOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ProviderError::Remote { status: 503, ref message } if message == "Service Unavailable"
        ));
    }

    #[tokio::test]
    async fn test_empty_completion_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&server)
            .await;

        let err = gateway_for(&server)
            .generate_text("x", &TextGenerationOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_missing_api_key_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let gateway = OpenAiGateway::new(OpenAiConfig {
            api_key: None,
            base_url: server.uri(),
            ..Default::default()
        })
        .unwrap();

        let err = gateway
            .generate_image("x", &ImageGenerationOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_configuration());
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_transport_error() {
        let gateway = OpenAiGateway::new(OpenAiConfig {
            api_key: Some("test-key".to_string()),
            base_url: "http://127.0.0.1:1".to_string(),
            ..Default::default()
        })
        .unwrap();

        let err = gateway
            .generate_text("x", &TextGenerationOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Transport(_)));
    }

    #[tokio::test]
    async fn test_timeout_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_secs(2))
                    .set_body_json(json!({ "choices": [] })),
            )
            .mount(&server)
            .await;

        let gateway = OpenAiGateway::new(OpenAiConfig {
            api_key: Some("test-key".to_string()),
            base_url: server.uri(),
            timeout: Duration::from_millis(100),
            ..Default::default()
        })
        .unwrap();

        let err = gateway
            .generate_text("x", &TextGenerationOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Transport(_)));
    }

    #[tokio::test]
    async fn test_generate_image_returns_data_uri() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/images/generations"))
            .and(body_partial_json(json!({
                "model": "dall-e-3",
                "n": 1,
                "size": "1792x1024",
                "quality": "hd",
                "response_format": "b64_json"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{ "b64_json": "iVBORw0KGgo=" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let options = ImageGenerationOptions {
            size: ImageSize::Landscape1792x1024,
            quality: ImageQuality::High,
            model: None,
        };
        let uri = gateway_for(&server).generate_image("x", &options).await.unwrap();
        assert_eq!(uri, "data:image/png;base64,iVBORw0KGgo=");
    }

    #[tokio::test]
    async fn test_image_without_payload_is_missing_image() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/images/generations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{ "url": "https://example.com/a.png" }]
            })))
            .mount(&server)
            .await;

        let err = gateway_for(&server)
            .generate_image("x", &ImageGenerationOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::MissingImage));
    }
}
