//! Word-count threshold for generated sections.

use regex::Regex;
use std::sync::LazyLock;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("Valid word regex"));

/// Accepts text with at least `min_words` word tokens.
///
/// A word is a maximal run of Unicode word characters, so punctuation and
/// whitespace separate words and "don't" counts as two.
///
/// # Examples
///
/// ```
/// use scriptorium_pipeline::ContentValidator;
///
/// let validator = ContentValidator::new(3);
/// assert_eq!(ContentValidator::word_count("Hello, world!"), 2);
/// assert!(!validator.is_acceptable("Hello, world!"));
/// assert!(validator.is_acceptable("one two three"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentValidator {
    min_words: usize,
}

impl Default for ContentValidator {
    fn default() -> Self {
        Self::new(500)
    }
}

impl ContentValidator {
    /// Create a validator with the given threshold.
    pub fn new(min_words: usize) -> Self {
        Self { min_words }
    }

    /// The threshold in effect.
    pub fn min_words(&self) -> usize {
        self.min_words
    }

    /// Count word tokens.
    pub fn word_count(text: &str) -> usize {
        WORD.find_iter(text).count()
    }

    /// True when `text` meets the threshold.
    pub fn is_acceptable(&self, text: &str) -> bool {
        Self::word_count(text) >= self.min_words
    }
}
