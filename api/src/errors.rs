use crate::store::PostError;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tower::BoxError;
use tracing::{error, warn};

#[derive(Debug)]
pub enum ApiError {
    ValidationError(String),
    NotFound(String),
    BadRequest(String),
    Timeout,
    Overloaded,
    InternalError(String),
}

impl From<PostError> for ApiError {
    fn from(err: PostError) -> Self {
        match err {
            PostError::MissingFields(_) => ApiError::ValidationError(err.to_string()),
            PostError::NotFound(_) => ApiError::NotFound(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Convert our custom errors to HTTP responses
///
/// Every error body has the shape `{"error": "..."}`
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Timeout => (StatusCode::REQUEST_TIMEOUT, "Request timed out".into()),
            ApiError::Overloaded => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Service temporarily unavailable".into(),
            ),
            ApiError::InternalError(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                )
            }
        };

        if status.is_client_error() {
            warn!(status = status.as_u16(), "{}", message);
        }

        (
            status,
            Json(serde_json::json!({
              "error": message
            })),
        )
            .into_response()
    }
}

/// Maps failures raised by the tower middleware stack (timeout, load shedding)
pub async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        ApiError::Timeout
    } else {
        ApiError::Overloaded
    }
}

/// Fallback for routes that do not exist
pub async fn route_not_found() -> ApiError {
    ApiError::NotFound("Not Found".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_errors_map_to_client_statuses() {
        let response = ApiError::from(PostError::NotFound(3)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::from(PostError::MissingFields(vec!["title"])).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_errors_hide_details() {
        let response = ApiError::InternalError("lock poisoned".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn elapsed_maps_to_timeout() {
        let err: BoxError = Box::new(tower::timeout::error::Elapsed::new());
        assert!(matches!(handle_middleware_error(err).await, ApiError::Timeout));

        let err: BoxError = "shed".into();
        assert!(matches!(handle_middleware_error(err).await, ApiError::Overloaded));
    }
}
