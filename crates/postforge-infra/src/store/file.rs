//! File-backed post store - one pretty-printed JSON file per post.
//!
//! Writes are plain overwrites with no locking between writers; ids are
//! fresh per post so two writers never target the same file. Capacity and
//! ordering follow `createdAt`, which the in-process lock keeps increasing.
//!
//! A post is a member of the store only if its file parses. Files that
//! match the naming scheme but do not parse are never listed or counted,
//! and the next insert removes them.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use postforge_core::domain::Post;
use postforge_core::error::StoreError;
use postforge_core::ports::{DEFAULT_POST_CAPACITY, InsertOutcome, PostStore};

const FILE_PREFIX: &str = "post-";
const FILE_SUFFIX: &str = ".json";

/// Post store that persists each post as `post-<id>.json` in a directory.
pub struct FilePostStore {
    dir: PathBuf,
    capacity: usize,
    /// Serializes compound operations within this process.
    write_lock: Mutex<()>,
}

impl FilePostStore {
    pub fn new(dir: impl Into<PathBuf>, capacity: usize) -> Self {
        Self {
            dir: dir.into(),
            capacity: capacity.max(1),
            write_lock: Mutex::new(()),
        }
    }

    pub fn with_default_capacity(dir: impl Into<PathBuf>) -> Self {
        Self::new(dir, DEFAULT_POST_CAPACITY)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{FILE_PREFIX}{id}{FILE_SUFFIX}"))
    }

    /// Create the directory if it does not exist yet.
    async fn ensure_dir(&self) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StoreError::Io(format!("{}: {e}", self.dir.display())))
    }

    fn is_post_file(path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with(FILE_PREFIX) && n.ends_with(FILE_SUFFIX))
            .unwrap_or(false)
    }

    async fn post_files(&self) -> Result<Vec<PathBuf>, StoreError> {
        let mut dir = match tokio::fs::read_dir(&self.dir).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Io(e.to_string())),
        };

        let mut files = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?
        {
            let path = entry.path();
            if Self::is_post_file(&path) {
                files.push(path);
            }
        }
        Ok(files)
    }

    /// Load every readable post, oldest first, along with the paths of
    /// post files that could not be parsed.
    async fn load_sorted(&self) -> Result<Loaded, StoreError> {
        let mut loaded = Loaded::default();
        for path in self.post_files().await? {
            let bytes = tokio::fs::read(&path)
                .await
                .map_err(|e| StoreError::Io(e.to_string()))?;
            match serde_json::from_slice::<Post>(&bytes) {
                Ok(post) => loaded.posts.push(post),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable post file");
                    loaded.corrupt.push(path);
                }
            }
        }

        loaded.posts.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(loaded)
    }

    async fn remove(path: &Path) -> Result<(), StoreError> {
        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(format!("{}: {e}", path.display()))),
        }
    }
}

#[derive(Default)]
struct Loaded {
    posts: Vec<Post>,
    corrupt: Vec<PathBuf>,
}

#[async_trait]
impl PostStore for FilePostStore {
    async fn insert(&self, mut post: Post) -> Result<InsertOutcome, StoreError> {
        let _guard = self.write_lock.lock().await;

        let Loaded { posts: existing, corrupt } = self.load_sorted().await?;

        for path in &corrupt {
            Self::remove(path).await?;
            tracing::warn!(path = %path.display(), "Removed unreadable post file");
        }

        // Order on disk is only recoverable from createdAt, so keep it strictly increasing.
        if let Some(newest) = existing.last() {
            if post.created_at <= newest.created_at {
                post.created_at = newest.created_at + chrono::Duration::microseconds(1);
            }
        }

        // The directory may hold more than `capacity` posts if it was written
        // with a larger capacity, so trim down to make room for one.
        let overflow = (existing.len() + 1).saturating_sub(self.capacity);
        for oldest in &existing[..overflow] {
            Self::remove(&self.path_for(oldest.id)).await?;
            tracing::debug!(post_id = %oldest.id, "Evicted oldest post file");
        }
        let evicted = existing[..overflow].first().map(|p| p.id);

        let json = serde_json::to_vec_pretty(&post)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        self.ensure_dir().await?;
        let path = self.path_for(post.id);
        tokio::fs::write(&path, json)
            .await
            .map_err(|e| StoreError::Io(format!("{}: {e}", path.display())))?;

        tracing::debug!(path = %path.display(), "Post written to disk");

        Ok(InsertOutcome { post, evicted })
    }

    async fn list_all(&self) -> Result<Vec<Post>, StoreError> {
        let mut posts = self.load_sorted().await?.posts;
        posts.reverse();
        Ok(posts)
    }

    /// Removes every post file, readable or not, and reports how many posts
    /// were listed before the call.
    async fn clear(&self) -> Result<usize, StoreError> {
        let _guard = self.write_lock.lock().await;

        let loaded = self.load_sorted().await?;
        for post in &loaded.posts {
            Self::remove(&self.path_for(post.id)).await?;
        }
        for path in &loaded.corrupt {
            Self::remove(path).await?;
        }
        Ok(loaded.posts.len())
    }

    async fn len(&self) -> Result<usize, StoreError> {
        Ok(self.load_sorted().await?.posts.len())
    }
}
