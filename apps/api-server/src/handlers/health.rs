//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub posts: usize,
}

/// Health check endpoint - returns server status and stored post count.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let response = HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        posts: state.posts.post_count().await?,
    };

    Ok(HttpResponse::Ok().json(response))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test};
    use postforge_core::PostService;
    use postforge_infra::{InMemoryPostStore, NoopResearch};
    use serde_json::Value;

    use crate::handlers::configure_routes;
    use crate::state::{AppState, UnconfiguredGateway};

    #[actix_web::test]
    async fn test_health_reports_empty_store() {
        let service = PostService::new(
            Arc::new(UnconfiguredGateway),
            Arc::new(InMemoryPostStore::default()),
        )
        .with_research(Arc::new(NoopResearch));
        let app = test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(AppState::from_service(service)))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["posts"], 0);
    }
}
