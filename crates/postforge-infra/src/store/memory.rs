//! In-memory post store - bounded, FIFO eviction.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use postforge_core::domain::Post;
use postforge_core::error::StoreError;
use postforge_core::ports::{DEFAULT_POST_CAPACITY, InsertOutcome, PostStore};

#[derive(Default)]
struct Entries {
    posts: HashMap<Uuid, Post>,
    /// Insertion order, oldest at the front.
    order: VecDeque<Uuid>,
}

/// In-memory post store using a HashMap plus an insertion-order queue.
///
/// The whole check-evict-insert sequence runs under one write lock, so
/// concurrent inserts keep the FIFO order intact.
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    capacity: usize,
    entries: RwLock<Entries>,
}

impl InMemoryPostStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: RwLock::new(Entries::default()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new(DEFAULT_POST_CAPACITY)
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn insert(&self, mut post: Post) -> Result<InsertOutcome, StoreError> {
        let mut entries = self.entries.write().await;

        // createdAt never goes backwards relative to insertion order.
        if let Some(newest) = entries.order.back().and_then(|id| entries.posts.get(id)) {
            if post.created_at < newest.created_at {
                post.created_at = newest.created_at;
            }
        }

        let mut evicted = None;
        if entries.posts.len() >= self.capacity {
            if let Some(oldest) = entries.order.pop_front() {
                entries.posts.remove(&oldest);
                tracing::debug!(post_id = %oldest, "Evicted oldest post from memory");
                evicted = Some(oldest);
            }
        }

        // Re-inserting an id moves it to the back.
        if entries.posts.insert(post.id, post.clone()).is_some() {
            entries.order.retain(|id| *id != post.id);
        }
        entries.order.push_back(post.id);

        tracing::debug!(total = entries.posts.len(), "Post stored in memory");

        Ok(InsertOutcome { post, evicted })
    }

    async fn list_all(&self) -> Result<Vec<Post>, StoreError> {
        let entries = self.entries.read().await;
        Ok(entries
            .order
            .iter()
            .rev()
            .filter_map(|id| entries.posts.get(id).cloned())
            .collect())
    }

    async fn clear(&self) -> Result<usize, StoreError> {
        let mut entries = self.entries.write().await;
        let count = entries.posts.len();
        entries.posts.clear();
        entries.order.clear();
        Ok(count)
    }

    async fn len(&self) -> Result<usize, StoreError> {
        Ok(self.entries.read().await.posts.len())
    }
}
