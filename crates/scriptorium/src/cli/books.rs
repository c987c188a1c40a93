//! `list` and `fetch` command handlers.

use scriptorium::{Page, ScriptoriumConfig, ScriptoriumResult, services, write_document};
use std::path::PathBuf;

/// Print one line per stored book, newest first.
pub async fn list_books(config: &ScriptoriumConfig, page: u32, page_size: u32) -> ScriptoriumResult<()> {
    let storage = services::storage(&config.storage)?;
    let books = storage.list(Page::new(page, page_size)).await?;

    if books.is_empty() {
        println!("No books found");
        return Ok(());
    }

    for book in books {
        println!(
            "{}  {}  {:>8} bytes  {}",
            book.id,
            book.created_at.format("%Y-%m-%d %H:%M:%S"),
            book.size_bytes,
            book.title
        );
    }
    Ok(())
}

/// Copy a stored document to disk.
pub async fn fetch_book(
    config: &ScriptoriumConfig,
    id: &str,
    output: Option<PathBuf>,
) -> ScriptoriumResult<()> {
    let storage = services::storage(&config.storage)?;
    let book = storage.load(id).await?;

    let output = output.unwrap_or_else(|| PathBuf::from(book.filename()));
    write_document(&output, &book.content)?;
    println!("{}", output.display());
    Ok(())
}
