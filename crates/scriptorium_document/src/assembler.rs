//! Book to DOCX conversion.

use crate::PngDimensions;
use docx_rs::{BreakType, Docx, Paragraph, Pic, Run, Style, StyleType};
use scriptorium_core::BookDocument;
use scriptorium_error::DocumentError;
use std::io::Cursor;
use tracing::{debug, info, instrument, warn};

/// MIME type of the produced documents.
pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Hex color of lines that start with "Subtitle".
pub const SUBTITLE_COLOR: &str = "228B22";

const EMU_PER_INCH: u32 = 914_400;
const COVER_WIDTH_INCHES: u32 = 6;
const TITLE_STYLE: &str = "Title";
const HEADING_STYLE: &str = "Heading1";

/// Renders a [`BookDocument`] as DOCX bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentAssembler;

impl DocumentAssembler {
    /// Create an assembler.
    pub fn new() -> Self {
        Self
    }

    /// Build and pack the document.
    ///
    /// # Errors
    ///
    /// Returns a `DocumentError` if packing the archive fails.
    #[instrument(skip(self, book), fields(title = %book.title(), chapters = book.chapters().len()))]
    pub fn assemble(&self, book: &BookDocument) -> Result<Vec<u8>, DocumentError> {
        let docx = self.build(book);

        let mut buffer = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buffer)
            .map_err(|e| DocumentError::new(format!("Failed to pack document: {}", e)))?;

        let bytes = buffer.into_inner();
        info!(size = bytes.len(), "Assembled document");
        Ok(bytes)
    }

    /// Lay out the document without packing it.
    pub fn build(&self, book: &BookDocument) -> Docx {
        let mut docx = Docx::new()
            .add_style(Style::new(TITLE_STYLE, StyleType::Paragraph).name("Title").size(56))
            .add_style(
                Style::new(HEADING_STYLE, StyleType::Paragraph)
                    .name("Heading 1")
                    .size(32)
                    .bold(),
            );

        if let Some(cover) = book.cover() {
            docx = match cover_paragraph(cover) {
                Some(paragraph) => docx
                    .add_paragraph(paragraph)
                    .add_paragraph(Paragraph::new().add_run(Run::new().add_break(BreakType::Page))),
                None => {
                    warn!(size = cover.len(), "Cover image unreadable, skipping");
                    docx
                }
            };
        }

        docx = docx
            .add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text(book.title().as_str()))
                    .style(TITLE_STYLE),
            )
            .add_paragraph(
                Paragraph::new().add_run(
                    Run::new()
                        .add_text(format!("Author: {}", book.author()))
                        .bold(),
                ),
            );

        for chapter in book.chapters() {
            debug!(chapter = %chapter.title, "Adding chapter");
            docx = docx.add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text(chapter.title.as_str()))
                    .style(HEADING_STYLE),
            );

            for (line, subtitle) in body_lines(&chapter.body) {
                docx = docx.add_paragraph(Paragraph::new().add_run(line_run(line, subtitle)));
            }
        }

        docx
    }
}

/// Non-blank lines of a chapter body, trimmed.
///
/// Each line is paired with whether it starts with the subtitle marker.
/// The marker must open the raw line, so indented text is not a subtitle.
fn body_lines(body: &str) -> impl Iterator<Item = (&str, bool)> {
    body.split('\n')
        .map(|raw| (raw.trim(), raw.starts_with("Subtitle")))
        .filter(|(line, _)| !line.is_empty())
}

fn line_run(line: &str, subtitle: bool) -> Run {
    let run = Run::new().add_text(line);
    if subtitle {
        run.bold().color(SUBTITLE_COLOR)
    } else {
        run
    }
}

fn cover_paragraph(cover: &[u8]) -> Option<Paragraph> {
    let dims = PngDimensions::read(cover)?;
    let width_emu = COVER_WIDTH_INCHES * EMU_PER_INCH;
    let height_emu = dims.scaled_height(width_emu);

    let pic = Pic::new_with_dimensions(cover.to_vec(), *dims.width(), *dims.height())
        .size(width_emu, height_emu);
    Some(Paragraph::new().add_run(Run::new().add_image(pic)))
}
