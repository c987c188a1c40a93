//! HTTP request handlers.

use crate::{ApiError, AppState, BookListResponse, GenerateBookResponse, HealthResponse, MessageResponse};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use scriptorium_core::{GenerationRequest, Page};
use scriptorium_document::DOCX_MIME_TYPE;
use tracing::{error, info, instrument, warn};

/// Welcome message.
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the Book Generator API".to_string(),
    })
}

/// Health check endpoint.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Generate a book from an outline and store it.
///
/// Malformed bodies and missing fields are rejected with 400 before any
/// generation call. Generation failures are 500 and store nothing.
#[instrument(skip_all)]
pub async fn generate_book(
    State(state): State<AppState>,
    body: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerateBookResponse>, ApiError> {
    let Json(request) = body.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected request body");
        ApiError::bad_request(rejection.body_text())
    })?;

    if let Err(e) = request.validate() {
        warn!(error = %e, "Rejected incomplete request");
        return Err(ApiError::bad_request(
            "Missing data for writing style, book description, or chapter titles",
        ));
    }

    info!(chapters = request.chapter_titles.len(), "Generating book");
    let stored = state
        .generator
        .generate_and_store(&request, state.storage.as_ref())
        .await
        .map_err(|e| {
            error!(error = %e, "Error generating book");
            ApiError::from_generation(&e)
        })?;

    Ok(Json(GenerateBookResponse::from(&stored)))
}

/// Download a stored document.
#[instrument(skip(state))]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let book = state.storage.load(&id).await.map_err(|e| {
        if e.is_not_found() {
            warn!(error = %e, "Book not found");
        } else {
            error!(error = %e, "Failed to load book");
        }
        ApiError::from_lookup(&e)
    })?;

    let disposition = format!("attachment; filename=\"{}\"", book.filename());
    Ok((
        [
            (header::CONTENT_TYPE, DOCX_MIME_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        book.content,
    ))
}

/// List stored books, newest first.
#[instrument(skip(state))]
pub async fn list_books(
    State(state): State<AppState>,
    Query(page): Query<Page>,
) -> Result<Json<BookListResponse>, ApiError> {
    let page = Page::new(page.page, page.page_size);
    let books = state.storage.list(page).await.map_err(|e| {
        error!(error = %e, "Failed to list books");
        ApiError::internal(e.to_string())
    })?;

    Ok(Json(BookListResponse {
        books,
        page: page.page,
        page_size: page.page_size,
    }))
}
