//! Post service - validates input, runs the agents, assembles and stores posts.

use std::sync::Arc;

use crate::agents::{ImageAgent, ResearchAgent, TextAgent};
use crate::domain::Post;
use crate::error::DomainError;
use crate::ports::{PostStore, ProviderGateway, ResearchSource};

/// Orchestrates the generation pipeline over an injected store.
#[derive(Clone)]
pub struct PostService {
    text_agent: TextAgent,
    image_agent: ImageAgent,
    research_agent: Option<ResearchAgent>,
    store: Arc<dyn PostStore>,
}

impl PostService {
    pub fn new(gateway: Arc<dyn ProviderGateway>, store: Arc<dyn PostStore>) -> Self {
        Self {
            text_agent: TextAgent::new(gateway.clone()),
            image_agent: ImageAgent::new(gateway),
            research_agent: None,
            store,
        }
    }

    /// Enrich text prompts with a research source before generation.
    pub fn with_research(mut self, source: Arc<dyn ResearchSource>) -> Self {
        self.research_agent = Some(ResearchAgent::new(source));
        self
    }

    /// Create a post from `prompt`.
    ///
    /// Text generation is mandatory and its failure aborts the call. Image
    /// generation only runs when requested and can never fail the call.
    pub async fn create_post(
        &self,
        prompt: &str,
        generate_image: bool,
    ) -> Result<Post, DomainError> {
        if prompt.trim().is_empty() {
            return Err(DomainError::Validation("prompt is required".to_string()));
        }

        let text_prompt = match &self.research_agent {
            Some(agent) => agent.enrich_prompt(prompt).await,
            None => prompt.to_string(),
        };

        tracing::debug!("Generating post text");
        let text = self.text_agent.run(&text_prompt).await?;

        let image = if generate_image {
            tracing::debug!("Generating post image");
            self.image_agent.run(prompt).await.into_data_uri()
        } else {
            String::new()
        };

        let post = Post::new(prompt.to_string(), text, image);
        let outcome = self.store.insert(post).await?;

        if let Some(evicted) = outcome.evicted {
            tracing::info!(post_id = %evicted, "Evicted oldest post");
        }
        tracing::info!(post_id = %outcome.post.id, "Post created");

        Ok(outcome.post)
    }

    /// All stored posts, newest first.
    pub async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.store.list_all().await?)
    }

    pub async fn post_count(&self) -> Result<usize, DomainError> {
        Ok(self.store.len().await?)
    }

    /// Remove all stored posts, returning how many were removed.
    pub async fn clear_posts(&self) -> Result<usize, DomainError> {
        let count = self.store.clear().await?;
        tracing::info!(count, "Posts cleared");
        Ok(count)
    }
}
