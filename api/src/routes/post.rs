use crate::{
    AppState,
    dto::{CreatePostRequest, MessageResponse, SearchParams, UpdatePostRequest},
    errors::ApiError,
    extract::JsonPayload,
    models::Post,
    store::PostQuery,
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use tracing::info;

/// GET /api/posts
pub async fn list_posts(State(state): State<AppState>) -> Json<Vec<Post>> {
    Json(state.posts.list().await)
}

/// GET /api/posts/search?title=..&content=..&sort=title|content&direction=asc|desc
/// A repeated key uses its first value.
pub async fn search_posts(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let Query(pairs) = pairs?;
    let query = PostQuery::from(pairs.into_iter().collect::<SearchParams>());
    Ok(Json(state.posts.search(&query).await))
}

/// POST /api/posts
/// Body: { "title": "...", "content": "..." }
pub async fn create_post(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let (title, content) = payload.unwrap_or_default().into_fields()?;

    let post = state.posts.create(title, content).await;

    info!("Post created: {}", post.id);

    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /api/posts/{id}
/// Body: any subset of { "title": "...", "content": "..." }
pub async fn update_post(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    JsonPayload(payload): JsonPayload<UpdatePostRequest>,
) -> Result<Json<Post>, ApiError> {
    let Path(id) = id?;
    let payload = payload.unwrap_or_default();

    let post = state
        .posts
        .update(id, payload.title, payload.content)
        .await?;

    info!("Post updated: {}", id);

    Ok(Json(post))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = id?;

    state.posts.delete(id).await?;

    info!("Post deleted: {}", id);

    Ok(Json(MessageResponse::new(format!(
        "Post with id {id} has been deleted successfully."
    ))))
}
