//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use postforge_core::ports::DEFAULT_POST_CAPACITY;

#[cfg(feature = "openai")]
use postforge_infra::OpenAiConfig;

/// Where generated posts are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// Bounded in-memory FIFO, lost on restart.
    Memory,
    /// One JSON file per post in `dir`.
    File { dir: PathBuf },
}

/// Post store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub capacity: usize,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreConfig,
    #[cfg(feature = "openai")]
    pub openai: OpenAiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            store: StoreConfig::from_env(),
            #[cfg(feature = "openai")]
            openai: OpenAiConfig::from_env(),
        }
    }
}

impl StoreConfig {
    /// `POST_STORE=memory|file`, `POSTS_DIR`, `POST_STORE_CAPACITY`.
    pub fn from_env() -> Self {
        let backend = Self::parse_backend(
            env::var("POST_STORE").ok().as_deref(),
            env::var("POSTS_DIR").ok(),
        );

        Self {
            backend,
            capacity: env::var("POST_STORE_CAPACITY")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|c| *c > 0)
                .unwrap_or(DEFAULT_POST_CAPACITY),
        }
    }

    fn parse_backend(kind: Option<&str>, dir: Option<String>) -> StoreBackend {
        match kind.map(str::to_lowercase).as_deref() {
            Some("file") => StoreBackend::File {
                dir: PathBuf::from(dir.unwrap_or_else(|| "posts".to_string())),
            },
            Some("memory") | None => StoreBackend::Memory,
            Some(other) => {
                tracing::warn!("Unknown POST_STORE '{}', using in-memory store", other);
                StoreBackend::Memory
            }
        }
    }
}
