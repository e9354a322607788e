use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a generated social-media post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub prompt: String,
    pub title: String,
    pub content: String,
    /// Data URI of the illustration, or empty when no image was requested.
    #[serde(default)]
    pub image: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Assemble a new post with a fresh id and the current timestamp.
    pub fn new(prompt: String, text: GeneratedText, image: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            prompt,
            title: text.title,
            content: text.content,
            image,
            created_at: Utc::now(),
        }
    }
}

/// Title and body produced by the text agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedText {
    pub title: String,
    pub content: String,
}
