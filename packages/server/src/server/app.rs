//! Application setup and server configuration.

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::server::routes::{
    create_post_handler, delete_post_handler, health_handler, patch_post_handler,
    retrieve_post_detail_handler, retrieve_posts_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
}

/// Build the Axum application router
pub fn build_app(pool: PgPool) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(Any);

    let app_state = AppState { db_pool: pool };

    Router::new()
        .route(
            "/post",
            post(create_post_handler).get(retrieve_posts_handler),
        )
        .route(
            "/post/:no",
            get(retrieve_post_detail_handler)
                .patch(patch_post_handler)
                .delete(delete_post_handler),
        )
        .route("/health", get(health_handler))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
