use crate::{AppState, dto::HealthResponse};
use axum::{Json, extract::State};

/// GET /health
/// Response: 200 OK with JSON
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        posts: state.posts.len().await,
    })
}
