pub mod health;
pub mod post;

use crate::{AppState, errors::route_not_found};
use axum::{
    Router,
    routing::{get, put},
};

/// Route table: (method, path) -> handler
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/api/posts",
            get(post::list_posts).post(post::create_post),
        )
        .route("/api/posts/search", get(post::search_posts))
        .route(
            "/api/posts/{id}",
            put(post::update_post).delete(post::delete_post),
        )
        .fallback(route_not_found)
}
