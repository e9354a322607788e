//! Text agent - turns a topic into a post title and body.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde_json::Value;

use crate::domain::GeneratedText;
use crate::error::DomainError;
use crate::ports::{ProviderGateway, TextGenerationOptions};

/// Title used when the provider returns JSON without a usable `title`.
pub const UNTITLED_POST: &str = "Untitled post";

/// Title used when a plain-text response has no non-blank line.
pub const CREATIVE_POST: &str = "Creative post";

const TEMPERATURE: f32 = 0.8;
const MAX_TOKENS: u32 = 800;

// Greedy: first `{` through last `}`.
static JSON_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("valid regex"));

/// Generates `{title, content}` through the provider gateway.
#[derive(Clone)]
pub struct TextAgent {
    gateway: Arc<dyn ProviderGateway>,
}

impl TextAgent {
    pub fn new(gateway: Arc<dyn ProviderGateway>) -> Self {
        Self { gateway }
    }

    /// Generate a post for `prompt`. Any gateway failure becomes
    /// `DomainError::Generation`; there are no retries.
    pub async fn run(&self, prompt: &str) -> Result<GeneratedText, DomainError> {
        let instruction = build_instruction(prompt);
        let options = TextGenerationOptions {
            temperature: Some(TEMPERATURE),
            max_tokens: Some(MAX_TOKENS),
            ..Default::default()
        };

        let raw = self
            .gateway
            .generate_text(&instruction, &options)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Text agent failed");
                DomainError::Generation(e)
            })?;

        Ok(parse_response(&raw))
    }
}

fn build_instruction(prompt: &str) -> String {
    format!(
        "Create a creative, engaging social media post about the following topic: \"{prompt}\"\n\
         \n\
         Return the answer in the following JSON format:\n\
         {{\n  \
         \"title\": \"Catchy post title (at most 100 characters)\",\n  \
         \"content\": \"Full post content (2-3 paragraphs, engaging format)\"\n\
         }}"
    )
}

/// Extract a title and body from raw model output.
///
/// The first brace-delimited span is parsed as JSON. When there is no such
/// span, or it does not parse, the output is read as plain lines instead.
pub fn parse_response(raw: &str) -> GeneratedText {
    if let Some(m) = JSON_OBJECT.find(raw) {
        match serde_json::from_str::<Value>(m.as_str()) {
            Ok(parsed) => {
                return GeneratedText {
                    title: non_empty_str(&parsed, "title")
                        .unwrap_or(UNTITLED_POST)
                        .to_string(),
                    content: non_empty_str(&parsed, "content")
                        .unwrap_or(raw)
                        .to_string(),
                };
            }
            Err(e) => {
                tracing::warn!(error = %e, "Model output looked like JSON but did not parse");
            }
        }
    }

    parse_plain_lines(raw)
}

fn parse_plain_lines(raw: &str) -> GeneratedText {
    let lines: Vec<&str> = raw.lines().filter(|l| !l.trim().is_empty()).collect();

    let title = lines
        .first()
        .map(|l| l.trim().to_string())
        .unwrap_or_else(|| CREATIVE_POST.to_string());

    let body = lines.iter().skip(1).copied().collect::<Vec<_>>().join("\n");
    let content = if body.is_empty() { raw.to_string() } else { body };

    GeneratedText { title, content }
}

fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
