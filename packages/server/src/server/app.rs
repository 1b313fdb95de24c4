//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domains::relay::Relay;
use crate::server::routes::{
    auto_post_handler, default_auto_post_handler, default_instagram_post_handler, health_handler,
    instagram_post_handler, post_tweet_handler, root_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<Relay>,
}

/// Build the Axum application router
pub fn build_app(relay: Arc<Relay>) -> Router {
    let app_state = AppState { relay };

    // CORS configuration - the API is meant to be called from anywhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/instagram", get(default_instagram_post_handler))
        .route("/instagram/", get(default_instagram_post_handler))
        .route("/instagram/:handle", get(instagram_post_handler))
        .route("/post-tweet", post(post_tweet_handler))
        .route("/auto-post", post(default_auto_post_handler))
        .route("/auto-post/", post(default_auto_post_handler))
        .route("/auto-post/:handle", post(auto_post_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
