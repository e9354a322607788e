//! Post handlers - create, list, clear, export.

use actix_web::http::header::{ContentDisposition, ContentType, DispositionParam, DispositionType};
use actix_web::{HttpResponse, web};

use postforge_core::domain::export_post;
use postforge_shared::dto::{
    ClearPostsResponse, CreatePostRequest, CreatePostResponse, ExportPostRequest,
    ListPostsResponse,
};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let prompt = req.prompt.unwrap_or_default();

    let post = state.posts.create_post(&prompt, req.generate_image).await?;
    tracing::info!(request_id = %request_id.as_str(), post_id = %post.id, "Post created");

    Ok(HttpResponse::Ok().json(CreatePostResponse::new(post)))
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_posts().await?;
    Ok(HttpResponse::Ok().json(ListPostsResponse::new(posts)))
}

/// DELETE /api/posts
pub async fn clear_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let count = state.posts.clear_posts().await?;
    Ok(HttpResponse::Ok().json(ClearPostsResponse::removed(count)))
}

/// POST /api/posts/{id}/save
///
/// Serializes the post supplied in the body; the store is not consulted.
pub async fn export(
    path: web::Path<String>,
    body: web::Json<ExportPostRequest>,
) -> AppResult<HttpResponse> {
    let post = body
        .into_inner()
        .post
        .ok_or_else(|| AppError::BadRequest("Invalid post".to_string()))?;

    let path_id = path.into_inner();
    if path_id != post.id.to_string() {
        tracing::debug!(path_id = %path_id, post_id = %post.id, "Export path id differs from post id");
    }

    let export = export_post(&post)?;

    Ok(HttpResponse::Ok()
        .insert_header(ContentType::json())
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(export.filename)],
        })
        .body(export.bytes))
}
