//! Data Transfer Objects - request/response types for the API.

use postforge_core::domain::Post;
use serde::{Deserialize, Serialize};

/// Request to create a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default = "default_generate_image")]
    pub generate_image: bool,
}

fn default_generate_image() -> bool {
    true
}

/// Response to a successful create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostResponse {
    pub success: bool,
    pub post: Post,
}

impl CreatePostResponse {
    pub fn new(post: Post) -> Self {
        Self {
            success: true,
            post,
        }
    }
}

/// Stored posts, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPostsResponse {
    pub success: bool,
    pub count: usize,
    pub posts: Vec<Post>,
}

impl ListPostsResponse {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            success: true,
            count: posts.len(),
            posts,
        }
    }
}

/// Response to clearing the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearPostsResponse {
    pub success: bool,
    pub message: String,
}

impl ClearPostsResponse {
    pub fn removed(count: usize) -> Self {
        Self {
            success: true,
            message: format!("{count} posts removed"),
        }
    }
}

/// Request to export a post the caller already holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportPostRequest {
    #[serde(default)]
    pub post: Option<Post>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_image_defaults_to_true() {
        let req: CreatePostRequest = serde_json::from_str(r#"{"prompt":"tips"}"#).unwrap();
        assert!(req.generate_image);

        let req: CreatePostRequest =
            serde_json::from_str(r#"{"prompt":"tips","generateImage":false}"#).unwrap();
        assert!(!req.generate_image);
    }

    #[test]
    fn test_missing_prompt_is_none() {
        let req: CreatePostRequest = serde_json::from_str("{}").unwrap();
        assert!(req.prompt.is_none());
    }

    #[test]
    fn test_clear_message() {
        assert_eq!(ClearPostsResponse::removed(3).message, "3 posts removed");
    }
}
