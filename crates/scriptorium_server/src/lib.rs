//! HTTP surface for the Scriptorium book generation service.
//!
//! | Method | Path | Purpose |
//! |---|---|---|
//! | `POST` | `/api/generate-book` | Generate and store a book |
//! | `GET` | `/api/books/:id` | Download a stored document |
//! | `GET` | `/api/books` | List stored books, newest first |
//! | `GET` | `/` | Welcome message |
//! | `GET` | `/health` | Liveness check |

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod handlers;
mod server;
mod types;

pub use error::ApiError;
pub use handlers::{generate_book, get_book, health_check, list_books, root};
pub use server::{AppState, build_router, serve};
pub use types::{BookListResponse, GenerateBookResponse, HealthResponse, MessageResponse};
