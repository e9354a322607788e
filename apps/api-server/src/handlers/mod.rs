//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::json_config;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/posts")
                    .service(
                        web::resource("")
                            .route(web::post().to(posts::create_post))
                            .route(web::get().to(posts::list_posts))
                            .route(web::delete().to(posts::clear_posts)),
                    )
                    .route("/{id}/save", web::post().to(posts::export)),
            ),
    );
}
