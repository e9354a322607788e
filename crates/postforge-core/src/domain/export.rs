//! Single-post export.
//!
//! Export works on the caller's copy of a post and never touches the store,
//! so a post that has already been evicted can still be downloaded. The post
//! is written in its canonical form: fields outside `Post` are dropped and
//! `createdAt` uses chrono's RFC 3339 rendering.

use crate::domain::Post;
use crate::error::DomainError;

/// A post serialized for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostExport {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Serialize a post as pretty-printed JSON named `post-<id>.json`.
pub fn export_post(post: &Post) -> Result<PostExport, DomainError> {
    let bytes =
        serde_json::to_vec_pretty(post).map_err(|e| DomainError::Export(e.to_string()))?;

    Ok(PostExport {
        filename: format!("post-{}.json", post.id),
        bytes,
    })
}
