//! Router construction and startup.

use crate::handlers::{generate_book, get_book, health_check, list_books, root};
use axum::Router;
use axum::routing::{get, post};
use scriptorium_error::{HttpError, ScriptoriumResult};
use scriptorium_interface::BookStorage;
use scriptorium_pipeline::BookGenerator;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// State shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Book generation pipeline
    pub generator: Arc<BookGenerator>,
    /// Where finished books are saved
    pub storage: Arc<dyn BookStorage>,
}

impl AppState {
    /// Bundle a generator and a storage backend.
    pub fn new(generator: BookGenerator, storage: Arc<dyn BookStorage>) -> Self {
        Self {
            generator: Arc::new(generator),
            storage,
        }
    }
}

/// Build the API router with all endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/api/generate-book", post(generate_book))
        .route("/api/books", get(list_books))
        .route("/api/books/:id", get(get_book))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind `addr` and serve until the process exits.
pub async fn serve(addr: &str, state: AppState) -> ScriptoriumResult<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| HttpError::new(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!(addr, backend = state.storage.backend_name(), "Starting API server");

    axum::serve(listener, build_router(state))
        .await
        .map_err(|e| HttpError::new(format!("Server error: {}", e)))?;
    Ok(())
}
