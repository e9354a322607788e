use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Post;
use crate::error::StoreError;

/// Default number of posts kept by a store.
pub const DEFAULT_POST_CAPACITY: usize = 50;

/// Outcome of a store insert.
#[derive(Debug, Clone)]
pub struct InsertOutcome {
    /// The post as stored.
    pub post: Post,
    /// Id of the oldest post removed to make room, if any.
    pub evicted: Option<Uuid>,
}

/// Post store trait - a bounded, insertion-ordered collection of posts.
///
/// Eviction is strictly FIFO: once the store is at capacity, the oldest
/// inserted post is removed before the new one is added. Reads never change
/// the eviction order.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert a post, evicting the oldest entry when full.
    async fn insert(&self, post: Post) -> Result<InsertOutcome, StoreError>;

    /// All stored posts, most recently inserted first.
    async fn list_all(&self) -> Result<Vec<Post>, StoreError>;

    /// Remove every post. Returns how many were removed.
    async fn clear(&self) -> Result<usize, StoreError>;

    /// Number of stored posts.
    async fn len(&self) -> Result<usize, StoreError>;
}
