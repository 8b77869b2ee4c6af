pub mod config;
pub mod error;
pub mod handlers;

use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use counsel::{CompletionProvider, LegalAssistant};

pub use config::AppConfig;
pub use error::ApiError;

/// Shared, read-only state handed to every handler.
pub struct AppState {
    pub assistant: LegalAssistant,
}

impl AppState {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            assistant: LegalAssistant::new(provider),
        }
    }
}

/// Any origin may call us with GET/POST/OPTIONS.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/api/search", post(handlers::search))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
