use std::sync::Arc;

use axum::{extract::State, routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod config;
mod error;
mod handlers;
mod models;
mod services;

use services::memory::InMemoryTrackService;
use services::SharedTrackService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up TRACK_API_PORT, APP_ENV, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = crate::config::config();
    tracing::info!("Starting Track Service API in {:?} mode", config.environment);

    let service: SharedTrackService = Arc::new(InMemoryTrackService::new());
    let app = app(service);

    let bind_addr = format!("{}:{}", config.server.bind_address, config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("Track Service API listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

fn app(service: SharedTrackService) -> Router {
    let config = config::config();

    let router = Router::new()
        // Operational
        .route("/", get(root))
        .route("/health", get(health))
        // Track collection
        .merge(track_routes())
        .with_state(service);

    let router = if config.api.enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    if config.api.enable_request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

fn track_routes() -> Router<SharedTrackService> {
    use handlers::tracks;

    Router::new()
        // Collection-level operations
        .route(
            "/api/v1/track",
            get(tracks::track_get_all)
                .post(tracks::track_post)
                .delete(tracks::track_delete_all),
        )
        // Single-track operations
        .route(
            "/api/v1/track/:id",
            get(tracks::track_get)
                .put(tracks::track_put)
                .delete(tracks::track_delete),
        )
        // Name search
        .route("/api/v1/tracks/:track_name", get(tracks::tracks_get_by_name))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "Track Service API",
        "version": version,
        "description": "CRUD REST API for music track records",
        "endpoints": {
            "tracks": "/api/v1/track[/:id] (create, read, update, delete)",
            "search": "/api/v1/tracks/:trackName (search by name)",
            "health": "/health",
        }
    }))
}

async fn health(State(service): State<SharedTrackService>) -> axum::response::Json<Value> {
    let now = chrono::Utc::now();
    let tracks = service.get_all_tracks().await.len();

    axum::response::Json(json!({
        "status": "ok",
        "timestamp": now,
        "tracks": tracks
    }))
}
