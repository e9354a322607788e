//! Test doubles shared by the unit tests in this crate.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::Post;
use crate::error::{ProviderError, StoreError};
use crate::ports::{
    ImageGenerationOptions, InsertOutcome, PostStore, ProviderGateway, TextGenerationOptions,
};

/// Scripted gateway. `None` responses fail with a remote error.
#[derive(Default)]
pub(crate) struct FakeGateway {
    text: Option<String>,
    image: Option<String>,
    text_calls: AtomicUsize,
    image_calls: AtomicUsize,
    last_text: Mutex<Option<(String, TextGenerationOptions)>>,
    last_image: Mutex<Option<(String, ImageGenerationOptions)>>,
}

impl FakeGateway {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn image(mut self, uri: &str) -> Self {
        self.image = Some(uri.to_string());
        self
    }

    pub fn text_calls(&self) -> usize {
        self.text_calls.load(Ordering::SeqCst)
    }

    pub fn image_calls(&self) -> usize {
        self.image_calls.load(Ordering::SeqCst)
    }

    pub fn last_text_call(&self) -> Option<(String, TextGenerationOptions)> {
        self.last_text.lock().unwrap().clone()
    }

    pub fn last_image_call(&self) -> Option<(String, ImageGenerationOptions)> {
        self.last_image.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProviderGateway for FakeGateway {
    async fn generate_text(
        &self,
        prompt: &str,
        options: &TextGenerationOptions,
    ) -> Result<String, ProviderError> {
        self.text_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_text.lock().unwrap() = Some((prompt.to_string(), options.clone()));
        self.text.clone().ok_or_else(|| ProviderError::Remote {
            status: 500,
            message: "text backend down".into(),
        })
    }

    async fn generate_image(
        &self,
        prompt: &str,
        options: &ImageGenerationOptions,
    ) -> Result<String, ProviderError> {
        self.image_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_image.lock().unwrap() = Some((prompt.to_string(), options.clone()));
        self.image.clone().ok_or_else(|| ProviderError::Remote {
            status: 500,
            message: "image backend down".into(),
        })
    }
}

/// Minimal bounded store for pipeline tests.
pub(crate) struct VecStore {
    capacity: usize,
    posts: Mutex<Vec<Post>>,
}

impl VecStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            posts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl PostStore for VecStore {
    async fn insert(&self, post: Post) -> Result<InsertOutcome, StoreError> {
        let mut posts = self.posts.lock().unwrap();
        let evicted = if posts.len() >= self.capacity {
            Some(posts.remove(0).id)
        } else {
            None
        };
        posts.push(post.clone());
        Ok(InsertOutcome { post, evicted })
    }

    async fn list_all(&self) -> Result<Vec<Post>, StoreError> {
        Ok(self.posts.lock().unwrap().iter().rev().cloned().collect())
    }

    async fn clear(&self) -> Result<usize, StoreError> {
        let mut posts = self.posts.lock().unwrap();
        let count = posts.len();
        posts.clear();
        Ok(count)
    }

    async fn len(&self) -> Result<usize, StoreError> {
        Ok(self.posts.lock().unwrap().len())
    }
}
