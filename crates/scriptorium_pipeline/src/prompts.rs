//! Prompt templates.

/// Prompt for one subsection of a chapter.
///
/// # Examples
///
/// ```
/// use scriptorium_pipeline::chapter_prompt;
///
/// let prompt = chapter_prompt(1, "Harvest", "Lyrical", 800, None);
/// assert!(prompt.starts_with("Subtitle 1: Provide a detailed analysis"));
/// assert!(prompt.ends_with("at least 800 words."));
/// ```
pub fn chapter_prompt(
    subsection: usize,
    title: &str,
    style: &str,
    min_words: usize,
    elaboration: Option<&str>,
) -> String {
    let mut prompt = format!(
        "Subtitle {}: Provide a detailed analysis and insights for '{}', as part of a book in the style of '{}'. Ensure this section contains at least {} words.",
        subsection, title, style, min_words
    );

    if let Some(note) = elaboration {
        prompt.push_str(&format!(
            " Follow the instructions provided and include the following additional information after thinking it through intelligently. Add them in a way that is balanced and not excessive or abnormal: {}",
            note
        ));
    }

    prompt
}

/// Prompt asking for a book title.
pub fn title_prompt(description: &str) -> String {
    format!(
        "Here is the plot for the book: {}\n\n--\n\nRespond with a great title for this book. Only respond with the title, nothing else is allowed.",
        description
    )
}

/// Prompt asking for a cover description.
pub fn cover_prompt(description: &str) -> String {
    format!(
        "Plot: {}\n\n--\n\nDescribe the cover we should create, based on the plot. This should be visually rich and detailed, ideally two sentences long.",
        description
    )
}
