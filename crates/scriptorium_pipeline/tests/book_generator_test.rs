//! End-to-end tests for book generation with mock drivers.

mod test_utils;

use scriptorium_core::{GenerationRequest, Page};
use scriptorium_error::GenerationErrorKind;
use scriptorium_interface::BookStorage;
use scriptorium_pipeline::{
    BookGenerator, CoverGenerator, CoverSettings, PipelineSettings, TextGenerator,
};
use scriptorium_storage::InMemoryBookStorage;
use std::sync::Arc;
use test_utils::{MockImageDriver, MockTextDriver, Reply, fake_png};

fn settings() -> PipelineSettings {
    PipelineSettings {
        pacing_delay_ms: 0,
        ..PipelineSettings::default()
    }
}

fn request() -> GenerationRequest {
    GenerationRequest::new(
        "Wry and warm",
        "A lighthouse keeper's last winter",
        vec!["Arrival".to_string(), "Storm".to_string()],
        vec![],
    )
}

fn generator(driver: &MockTextDriver) -> BookGenerator {
    BookGenerator::new(TextGenerator::new(Arc::new(driver.clone())), settings())
}

#[tokio::test]
async fn test_missing_field_makes_no_calls() {
    let driver = MockTextDriver::new();
    let storage = InMemoryBookStorage::new();
    let mut request = request();
    request.chapter_titles.clear();

    let err = generator(&driver)
        .generate_and_store(&request, &storage)
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(driver.calls(), 0);
    assert!(storage.is_empty().await);
}

#[tokio::test]
async fn test_generates_and_stores_book() -> anyhow::Result<()> {
    let driver = MockTextDriver::new();
    let storage = InMemoryBookStorage::new();

    let stored = generator(&driver)
        .generate_and_store(&request(), &storage)
        .await?;

    // two chapters plus the title
    assert_eq!(driver.calls(), 3);
    assert_eq!(stored.title, "The Last Ember");
    assert!(stored.content.starts_with(b"PK"));

    let loaded = storage.load(&stored.id.to_string()).await?;
    assert_eq!(loaded.content, stored.content);

    let listed = storage.list(Page::default()).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, stored.id);
    Ok(())
}

#[tokio::test]
async fn test_chapters_generated_before_title() -> anyhow::Result<()> {
    let driver = MockTextDriver::new();

    let book = generator(&driver).generate_book(&request()).await?;

    let prompts = driver.prompts();
    assert!(prompts[0].contains("'Arrival'"));
    assert!(prompts[1].contains("'Storm'"));
    assert!(prompts[2].starts_with("Here is the plot for the book: A lighthouse keeper's last winter"));
    assert_eq!(book.chapters().len(), 2);
    assert!(book.fully_accepted());
    Ok(())
}

#[tokio::test]
async fn test_failed_generation_stores_nothing() {
    let driver = MockTextDriver::with_script(vec![Reply::Upstream(503)]);
    let storage = InMemoryBookStorage::new();

    let err = generator(&driver)
        .generate_and_store(&request(), &storage)
        .await
        .unwrap_err();

    assert!(matches!(
        err.generation_kind(),
        Some(GenerationErrorKind::Upstream { status: 503, .. })
    ));
    assert!(storage.is_empty().await);
}

#[tokio::test]
async fn test_cover_failure_does_not_fail_book() -> anyhow::Result<()> {
    let driver = MockTextDriver::new();
    let image = MockImageDriver::failing();
    let text = TextGenerator::new(Arc::new(driver.clone()));
    let cover = CoverGenerator::new(text.clone(), Arc::new(image.clone()), CoverSettings::default());

    let book = BookGenerator::new(text, settings())
        .with_cover(cover)
        .generate_book(&request())
        .await?;

    assert_eq!(image.calls(), 1);
    assert_eq!(book.title(), "The Last Ember");
    assert!(book.document().starts_with(b"PK"));
    Ok(())
}

#[tokio::test]
async fn test_cover_embedded_when_generated() -> anyhow::Result<()> {
    let driver = MockTextDriver::new();
    let image = MockImageDriver::returning(fake_png());
    let text = TextGenerator::new(Arc::new(driver.clone()));
    let cover = CoverGenerator::new(text.clone(), Arc::new(image.clone()), CoverSettings::default());

    let without = BookGenerator::new(text.clone(), settings())
        .generate_book(&request())
        .await?;
    let with = BookGenerator::new(text, settings())
        .with_cover(cover)
        .generate_book(&request())
        .await?;

    assert_eq!(image.calls(), 1);
    assert!(with.document().len() > without.document().len());
    Ok(())
}

#[tokio::test]
async fn test_rejected_cover_prompt_skips_image_call() -> anyhow::Result<()> {
    let driver = MockTextDriver::new();
    let image = MockImageDriver::returning(fake_png());
    let text = TextGenerator::new(Arc::new(driver.clone()));
    let cover = CoverGenerator::new(
        text.clone(),
        Arc::new(image.clone()),
        CoverSettings {
            max_prompt_chars: 1000,
            disallowed_terms: vec!["AURORA".to_string()],
        },
    );

    assert!(cover.generate_cover("A plot").await.is_none());
    assert_eq!(image.calls(), 0);
    assert!(cover.check_prompt("").is_err());
    assert!(cover.check_prompt(&"x".repeat(1001)).is_err());
    assert!(cover.check_prompt("A quiet harbor at dusk").is_ok());
    Ok(())
}
