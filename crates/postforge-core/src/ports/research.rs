//! Research port - contextual facts used to enrich a prompt.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Findings gathered about a topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchData {
    pub sources: Vec<String>,
    pub facts: Vec<String>,
    pub trends: Vec<String>,
}

impl ResearchData {
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty() && self.facts.is_empty() && self.trends.is_empty()
    }
}

/// Research source trait - abstraction over search backends.
#[async_trait]
pub trait ResearchSource: Send + Sync {
    async fn research(&self, topic: &str) -> Result<ResearchData, ResearchError>;
}

/// Research errors.
#[derive(Debug, thiserror::Error)]
pub enum ResearchError {
    #[error("Research backend failed: {0}")]
    Backend(String),
}
