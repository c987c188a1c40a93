//! Pipeline tuning knobs.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What to do when a section stays below the word threshold after every attempt.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ShortContentPolicy {
    /// Keep the last attempt and mark the chapter as not accepted
    #[default]
    AcceptLast,
    /// Fail the request with `ContentTooShort`
    Fail,
}

/// Chapter generation settings (`[pipeline]` configuration section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSettings {
    /// Word count a section needs to be accepted
    #[serde(default = "default_min_words")]
    pub min_words: usize,

    /// Word count requested in the prompt
    #[serde(default = "default_prompt_min_words")]
    pub prompt_min_words: usize,

    /// Generation attempts per section before the short-content policy applies
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,

    /// Sections generated per chapter
    #[serde(default = "default_subsections")]
    pub subsections_per_chapter: usize,

    /// Pause between chapters in sequential mode
    #[serde(default = "default_pacing_delay_ms")]
    pub pacing_delay_ms: u64,

    /// Chapters generated at once; 1 means sequential
    #[serde(default = "default_concurrency")]
    pub chapter_concurrency: usize,

    /// Fallback for sections that stay too short
    #[serde(default)]
    pub short_content_policy: ShortContentPolicy,

    /// Author used when the request names none
    #[serde(default = "default_author")]
    pub author: String,
}

fn default_min_words() -> usize {
    500
}

fn default_prompt_min_words() -> usize {
    800
}

fn default_max_attempts() -> usize {
    3
}

fn default_subsections() -> usize {
    1
}

fn default_pacing_delay_ms() -> u64 {
    1000
}

fn default_concurrency() -> usize {
    1
}

fn default_author() -> String {
    "Author Name".to_string()
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            min_words: default_min_words(),
            prompt_min_words: default_prompt_min_words(),
            max_attempts: default_max_attempts(),
            subsections_per_chapter: default_subsections(),
            pacing_delay_ms: default_pacing_delay_ms(),
            chapter_concurrency: default_concurrency(),
            short_content_policy: ShortContentPolicy::default(),
            author: default_author(),
        }
    }
}

impl PipelineSettings {
    /// Inter-chapter pause as a duration.
    pub fn pacing_delay(&self) -> Duration {
        Duration::from_millis(self.pacing_delay_ms)
    }
}

/// Cover prompt screening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverSettings {
    /// Longest cover description passed to the image model
    #[serde(default = "default_max_prompt_chars")]
    pub max_prompt_chars: usize,

    /// Case-insensitive terms that disqualify a description
    #[serde(default)]
    pub disallowed_terms: Vec<String>,
}

fn default_max_prompt_chars() -> usize {
    1000
}

impl Default for CoverSettings {
    fn default() -> Self {
        Self {
            max_prompt_chars: default_max_prompt_chars(),
            disallowed_terms: vec![],
        }
    }
}
