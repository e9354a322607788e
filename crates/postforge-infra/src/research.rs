//! Research backends.

use async_trait::async_trait;

use postforge_core::ports::{ResearchData, ResearchError, ResearchSource};

/// Research source that never finds anything.
///
/// Used until a search backend is wired in; prompts pass through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopResearch;

#[async_trait]
impl ResearchSource for NoopResearch {
    async fn research(&self, topic: &str) -> Result<ResearchData, ResearchError> {
        tracing::debug!(topic, "No research backend configured");
        Ok(ResearchData::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_empty_research() {
        let data = NoopResearch.research("anything").await.unwrap();
        assert!(data.is_empty());
    }
}
