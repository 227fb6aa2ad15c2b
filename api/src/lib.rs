//! In-memory blog post REST API.
//!
//! - List, search, create, update and delete posts
//! - Permissive CORS
//! - Structured request logging
//! - Request timeout and concurrency limit

pub mod config;
pub mod dto;
pub mod errors;
pub mod extract;
pub mod models;
pub mod routes;
pub mod states;
pub mod store;
pub mod telemetry;

pub use states::AppState;

use axum::{Router, error_handling::HandleErrorLayer};
use config::Config;
use errors::handle_middleware_error;
use tower::{ServiceBuilder, limit::GlobalConcurrencyLimitLayer};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Build the full application: routes, state and middleware
pub fn app(state: AppState, config: &Config) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
        .on_failure(DefaultOnFailure::new().level(Level::ERROR));

    // Router::layer wraps each route separately; the global layer keeps one
    // semaphore for all of them.
    let limits = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(handle_middleware_error))
        .timeout(config.request_timeout)
        .layer(GlobalConcurrencyLimitLayer::new(
            config.max_concurrent_requests,
        ));

    routes::router()
        .with_state(state)
        .layer(limits)
        .layer(trace)
        .layer(cors)
}
