//! Tests for DOCX assembly.

use scriptorium_core::BookDocument;
use scriptorium_document::DocumentAssembler;

fn fake_png(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = vec![0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];
    bytes.extend_from_slice(&13u32.to_be_bytes());
    bytes.extend_from_slice(b"IHDR");
    bytes.extend_from_slice(&width.to_be_bytes());
    bytes.extend_from_slice(&height.to_be_bytes());
    bytes.extend_from_slice(&[8, 6, 0, 0, 0, 0, 0, 0, 0]);
    bytes
}

fn sample_book(cover: Option<Vec<u8>>) -> BookDocument {
    let titles = vec!["The Arrival".to_string(), "The Storm".to_string()];
    let bodies = vec![
        "Subtitle 1: Landfall\nThe boat scraped the shingle.\n\n   \n".to_string(),
        "Wind rose before dawn.".to_string(),
    ];
    BookDocument::new("The Last Ember", "Jane Doe", &titles, bodies, cover)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

#[test]
fn test_assembled_bytes_are_a_zip_archive() -> anyhow::Result<()> {
    let bytes = DocumentAssembler::new().assemble(&sample_book(None))?;

    assert!(bytes.starts_with(b"PK"));
    assert!(contains(&bytes, b"word/document.xml"));
    Ok(())
}

#[test]
fn test_document_reads_back_with_content() -> anyhow::Result<()> {
    let bytes = DocumentAssembler::new().assemble(&sample_book(None))?;
    let json = docx_rs::read_docx(&bytes)?.json();

    assert!(json.contains("The Last Ember"));
    assert!(json.contains("Author: Jane Doe"));
    assert!(json.contains("The Arrival"));
    assert!(json.contains("The boat scraped the shingle."));
    assert!(json.contains("Wind rose before dawn."));
    Ok(())
}

#[test]
fn test_subtitle_lines_are_colored() {
    let json = DocumentAssembler::new().build(&sample_book(None)).json();

    assert!(json.contains("Subtitle 1: Landfall"));
    assert!(json.contains("228B22"));
    assert!(json.contains("Heading1"));
}

#[test]
fn test_plain_lines_are_not_colored() {
    let titles = vec!["Only".to_string()];
    let book = BookDocument::new("T", "A", &titles, vec!["No headings here".to_string()], None);
    let json = DocumentAssembler::new().build(&book).json();

    assert!(!json.contains("228B22"));
}

#[test]
fn test_indented_subtitle_is_plain_text() {
    let titles = vec!["Only".to_string()];
    let body = "  Subtitle 1: Not a heading".to_string();
    let book = BookDocument::new("T", "A", &titles, vec![body], None);
    let json = DocumentAssembler::new().build(&book).json();

    assert!(json.contains("Subtitle 1: Not a heading"));
    assert!(!json.contains("228B22"));
}

#[test]
fn test_cover_image_embedded() -> anyhow::Result<()> {
    let bytes = DocumentAssembler::new().assemble(&sample_book(Some(fake_png(512, 768))))?;

    assert!(contains(&bytes, b"word/media/"));
    Ok(())
}

#[test]
fn test_unreadable_cover_skipped() -> anyhow::Result<()> {
    let bytes = DocumentAssembler::new().assemble(&sample_book(Some(b"not an image".to_vec())))?;

    assert!(bytes.starts_with(b"PK"));
    assert!(!contains(&bytes, b"word/media/"));
    Ok(())
}
