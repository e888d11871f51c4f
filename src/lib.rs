pub mod bench;
pub mod error;
pub mod handlers;
pub mod markdown;
pub mod templates;

pub use error::{AppError, AppResult};

use axum::Router;
use axum::routing::{delete, get, post};
use std::sync::atomic::{AtomicU64, Ordering};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use std::sync::Arc;

/// Format latency in human-readable units
fn format_latency(duration: std::time::Duration) -> String {
    let micros = duration.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{}ms", micros / 1000)
    } else {
        format!("{:.1}s", micros as f64 / 1_000_000.0)
    }
}

pub struct AppState {
    pub bench: bench::Bench,
    pub project_name: String,
    pub app_version: String,
}

// Arc wrapper for shared state
pub type SharedAppState = Arc<AppState>;

impl AppState {
    pub fn new() -> Self {
        let project_name = std::env::current_dir()
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
            .unwrap_or_else(|| "Whetstone".to_string());

        Self {
            bench: bench::Bench::new(),
            project_name,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_app(state: SharedAppState) -> Router {
    Router::new()
        .route("/", get(handlers::landing))
        .route("/board", get(handlers::board))
        .route("/cases", post(handlers::add_case))
        .route("/cases/:id", get(handlers::case_detail))
        .route("/cases/:id/status", post(handlers::set_case_status))
        .route("/cases/:id/remove", post(handlers::remove_case))
        .route("/api/cases", get(handlers::list_cases))
        .route("/api/cases", post(handlers::create_case))
        .route("/api/cases/:id", post(handlers::update_case))
        .route("/api/cases/:id", delete(handlers::delete_case))
        .route("/api/summary", get(handlers::summary))
        .route("/health", get(handlers::health_check))
        .route("/style.css", get(handlers::serve_css))
        .route("/app.js", get(handlers::serve_js))
        .route("/favicon.ico", get(handlers::serve_favicon))
        .route("/favicon.svg", get(handlers::serve_favicon))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    static REQUEST_ID: AtomicU64 = AtomicU64::new(1);
                    let request_id_num = REQUEST_ID.fetch_add(1, Ordering::Relaxed);
                    let generator =
                        block_id::BlockId::new(block_id::Alphabet::alphanumeric(), 1234, 5);
                    let request_id = generator
                        .encode_string(request_id_num)
                        .unwrap_or_else(|| request_id_num.to_string());
                    tracing::info_span!(
                        "request",
                        id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                })
                .on_request(|request: &axum::http::Request<_>, _span: &Span| {
                    tracing::info!("-> {} {}", request.method(), request.uri());
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &Span| {
                        tracing::info!(
                            "<- {} latency={}",
                            response.status().as_u16(),
                            format_latency(latency)
                        );
                    },
                ),
        )
        .layer(CompressionLayer::new())
}
