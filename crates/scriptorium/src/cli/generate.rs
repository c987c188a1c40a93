//! `generate` command handler.

use scriptorium::{
    ScriptoriumConfig, ScriptoriumResult, Secrets, docx_filename, read_outline, services,
    write_document,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Generate a book and write it to disk, optionally saving it to storage.
pub async fn generate_book(
    config: &ScriptoriumConfig,
    outline: &Path,
    output: Option<PathBuf>,
    save: bool,
) -> ScriptoriumResult<()> {
    let request = read_outline(outline)?;
    let secrets = Secrets::from_env()?;
    let generator = services::book_generator(config, &secrets)?;

    let book = generator.generate_book(&request).await?;
    if !book.fully_accepted() {
        warn!("Some chapters stayed below the word threshold");
    }

    let output = output.unwrap_or_else(|| PathBuf::from(docx_filename(book.title())));
    write_document(&output, book.document())?;
    info!(title = %book.title(), path = %output.display(), "Wrote book");

    if save {
        let storage = services::storage(&config.storage)?;
        let stored = storage.save(book.title(), book.document().clone()).await?;
        println!("Saved \"{}\" as {}", stored.title, stored.id);
    }

    println!("{}", output.display());
    Ok(())
}
