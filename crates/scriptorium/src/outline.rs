//! Outline files and document output for the command line.

use scriptorium_core::GenerationRequest;
use scriptorium_error::{ConfigError, ScriptoriumResult, StorageError, StorageErrorKind};
use std::path::Path;

/// Parse an outline file as TOML when it ends in `.toml`, JSON otherwise.
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read or parsed.
pub fn read_outline(path: &Path) -> ScriptoriumResult<GenerationRequest> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::new(format!("Failed to read outline {}: {}", path.display(), e))
    })?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let request = if is_toml {
        toml::from_str(&text).map_err(|e| ConfigError::new(format!("Invalid outline: {}", e)))?
    } else {
        serde_json::from_str(&text)
            .map_err(|e| ConfigError::new(format!("Invalid outline: {}", e)))?
    };
    Ok(request)
}

/// Write `bytes` to `path`.
pub fn write_document(path: &Path, bytes: &[u8]) -> ScriptoriumResult<()> {
    std::fs::write(path, bytes).map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;
    Ok(())
}
