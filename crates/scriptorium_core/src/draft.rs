//! Per-chapter working state.

use serde::{Deserialize, Serialize};

/// A chapter as produced by the chapter pipeline.
///
/// `accepted` is false when at least one section was kept under the
/// degraded-content fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChapterDraft {
    /// Chapter title as requested
    pub title: String,
    /// Accumulated sections joined with a blank line
    pub body: String,
    /// Whether every section passed the content gate
    pub accepted: bool,
}

impl ChapterDraft {
    /// Start an empty draft for a chapter title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: String::new(),
            accepted: true,
        }
    }

    /// Append a generated section, separating sections with a blank line.
    pub fn push_section(&mut self, section: impl AsRef<str>, accepted: bool) {
        if !self.body.is_empty() {
            self.body.push_str("\n\n");
        }
        self.body.push_str(section.as_ref());
        self.accepted &= accepted;
    }
}
