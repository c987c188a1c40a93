//! Tests for generation request parsing and validation.

use scriptorium_core::{ChapterDraft, GenerationRequest, Page};

#[test]
fn test_missing_titles_rejected() {
    let request: GenerationRequest = serde_json::from_str(
        r#"{"writing_style": "Terse", "book_description": "A heist"}"#,
    )
    .unwrap();

    let err = request.validate().unwrap_err();
    assert!(format!("{}", err).contains("chapter_titles"));
}

#[test]
fn test_blank_fields_rejected() {
    let request = GenerationRequest::new("  ", "", vec!["One".to_string()], vec![]);

    let err = request.validate().unwrap_err();
    let message = format!("{}", err);
    assert!(message.contains("writing_style"));
    assert!(message.contains("book_description"));
    assert!(!message.contains("chapter_titles"));
}

#[test]
fn test_titles_as_array_are_trimmed() -> anyhow::Result<()> {
    let request: GenerationRequest = serde_json::from_str(
        r#"{
            "writing_style": "Lyrical",
            "book_description": "Two sisters and a vineyard",
            "chapter_titles": [" Harvest ", "", "Frost"]
        }"#,
    )?;

    assert_eq!(request.chapter_titles, vec!["Harvest", "Frost"]);
    assert!(request.validate().is_ok());
    Ok(())
}

#[test]
fn test_blank_title_drops_its_elaboration() -> anyhow::Result<()> {
    let request: GenerationRequest = serde_json::from_str(
        r#"{
            "writing_style": "Lyrical",
            "book_description": "Two sisters and a vineyard",
            "chapter_titles": ["Harvest", "", "Spring"],
            "chapter_elaborations": ["harvest note", "", "spring note"]
        }"#,
    )?;

    assert_eq!(request.chapter_titles, vec!["Harvest", "Spring"]);
    assert_eq!(request.elaboration(0), Some("harvest note"));
    assert_eq!(request.elaboration(1), Some("spring note"));
    Ok(())
}

#[test]
fn test_blank_joined_title_keeps_alignment() -> anyhow::Result<()> {
    let request: GenerationRequest = serde_json::from_str(
        r#"{
            "writing_style": "Lyrical",
            "book_description": "Two sisters and a vineyard",
            "chapter_titles": "Harvest, , Spring",
            "chapter_elaborations": ["harvest note", "ignored", "spring note"]
        }"#,
    )?;

    assert_eq!(request.chapter_titles, vec!["Harvest", "Spring"]);
    assert_eq!(request.elaboration(1), Some("spring note"));

    let built = GenerationRequest::new(
        "Lyrical",
        "Two sisters and a vineyard",
        vec!["Harvest".into(), " ".into(), "Spring".into()],
        vec!["harvest note".into(), "ignored".into(), "spring note".into()],
    );
    assert_eq!(built, request);
    Ok(())
}

#[test]
fn test_short_elaboration_list_is_safe() {
    let request = GenerationRequest::new(
        "Lyrical",
        "Two sisters and a vineyard",
        vec!["Harvest".into(), "Frost".into(), "Spring".into()],
        vec!["Mention the old press".into(), "   ".into()],
    );

    assert_eq!(request.elaboration(0), Some("Mention the old press"));
    assert_eq!(request.elaboration(1), None);
    assert_eq!(request.elaboration(2), None);
    assert_eq!(request.elaboration(99), None);
}

#[test]
fn test_draft_sections_joined_with_blank_line() {
    let mut draft = ChapterDraft::new("Harvest");
    draft.push_section("First part", true);
    draft.push_section("Second part", false);

    assert_eq!(draft.body, "First part\n\nSecond part");
    assert!(!draft.accepted);
}

#[test]
fn test_page_offsets() {
    assert_eq!(Page::default().offset(), 0);
    assert_eq!(Page::new(2, 5).offset(), 5);
    assert_eq!(Page::new(2, 5).limit(), 5);
}
