//! Research agent - enriches a prompt with facts from a `ResearchSource`.

use std::sync::Arc;

use crate::ports::ResearchSource;

#[derive(Clone)]
pub struct ResearchAgent {
    source: Arc<dyn ResearchSource>,
}

impl ResearchAgent {
    pub fn new(source: Arc<dyn ResearchSource>) -> Self {
        Self { source }
    }

    /// Append gathered facts to `prompt`. Returns the prompt unchanged when
    /// there are no facts or the source fails.
    pub async fn enrich_prompt(&self, prompt: &str) -> String {
        let research = match self.source.research(prompt).await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(error = %e, "Research failed, using prompt as-is");
                return prompt.to_string();
            }
        };

        if research.facts.is_empty() {
            return prompt.to_string();
        }

        tracing::debug!(facts = research.facts.len(), "Prompt enriched with research");
        format!(
            "{prompt}\n\nAdditional context:\n{}",
            research.facts.join("\n")
        )
    }
}
