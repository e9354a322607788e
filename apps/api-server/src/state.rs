//! Application state - shared across all handlers.

use std::sync::Arc;

use postforge_core::PostService;
use postforge_core::ports::{PostStore, ProviderGateway};
use postforge_infra::{FilePostStore, InMemoryPostStore, NoopResearch};

use crate::config::{AppConfig, StoreBackend};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
}

/// Gateway used when the server is built without a provider client.
#[cfg_attr(feature = "openai", allow(dead_code))]
pub struct UnconfiguredGateway;

#[async_trait::async_trait]
impl ProviderGateway for UnconfiguredGateway {
    async fn generate_text(
        &self,
        _prompt: &str,
        _options: &postforge_core::ports::TextGenerationOptions,
    ) -> Result<String, postforge_core::ProviderError> {
        Err(postforge_core::ProviderError::Configuration(
            "no provider compiled in".to_string(),
        ))
    }

    async fn generate_image(
        &self,
        _prompt: &str,
        _options: &postforge_core::ports::ImageGenerationOptions,
    ) -> Result<String, postforge_core::ProviderError> {
        Err(postforge_core::ProviderError::Configuration(
            "no provider compiled in".to_string(),
        ))
    }
}

impl AppState {
    /// Build the application state with the configured implementations.
    pub fn new(config: &AppConfig) -> Result<Self, postforge_core::ProviderError> {
        let store: Arc<dyn PostStore> = match &config.store.backend {
            StoreBackend::Memory => {
                tracing::info!(capacity = config.store.capacity, "Using in-memory post store");
                Arc::new(InMemoryPostStore::new(config.store.capacity))
            }
            StoreBackend::File { dir } => {
                tracing::info!(
                    dir = %dir.display(),
                    capacity = config.store.capacity,
                    "Using file-backed post store"
                );
                Arc::new(FilePostStore::new(dir.clone(), config.store.capacity))
            }
        };

        #[cfg(feature = "openai")]
        let gateway: Arc<dyn ProviderGateway> = {
            if config.openai.api_key.is_none() {
                tracing::warn!("OPENAI_API_KEY not set. Generation requests will fail.");
            }
            Arc::new(postforge_infra::OpenAiGateway::new(config.openai.clone())?)
        };

        #[cfg(not(feature = "openai"))]
        let gateway: Arc<dyn ProviderGateway> = {
            tracing::warn!("Running without openai feature - generation requests will fail");
            Arc::new(UnconfiguredGateway)
        };

        let service = PostService::new(gateway, store).with_research(Arc::new(NoopResearch));

        tracing::info!("Application state initialized");

        Ok(Self::from_service(service))
    }

    pub fn from_service(service: PostService) -> Self {
        Self {
            posts: Arc::new(service),
        }
    }
}
