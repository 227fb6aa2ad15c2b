// ============================================================================
// IN-MEMORY BLOG POST REST API
// ============================================================================

use blog_api::{AppState, app, config::Config, store::PostStore, telemetry};
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging
    telemetry::init(config.log_format);

    let state = AppState::new(PostStore::seeded());
    let app = app(state, &config);

    // Start server
    let addr = config.addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    info!("Server running on http://{}", addr);
    info!("API Endpoints:");
    info!("  GET    /health            - Health check");
    info!("  GET    /api/posts         - List posts");
    info!("  GET    /api/posts/search  - Search posts (title, content, sort, direction)");
    info!("  POST   /api/posts         - Create post");
    info!("  PUT    /api/posts/{{id}}    - Update post");
    info!("  DELETE /api/posts/{{id}}    - Delete post");

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
