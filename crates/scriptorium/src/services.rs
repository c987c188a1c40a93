//! Wiring configuration into running components.

use crate::config::{ScriptoriumConfig, Secrets, StorageSettings, TextSettings};
use scriptorium_error::ScriptoriumResult;
use scriptorium_interface::BookStorage;
use scriptorium_models::{AnthropicClient, StabilityClient};
use scriptorium_pipeline::{BookGenerator, CoverGenerator, TextGenerator};
use scriptorium_rate_limit::RateLimiter;
use scriptorium_server::AppState;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Text generator talking to the configured model.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn text_generator(settings: &TextSettings, api_key: &str) -> ScriptoriumResult<TextGenerator> {
    let client = AnthropicClient::new(api_key, settings.model.clone())
        .with_base_url(settings.base_url.clone())
        .with_timeout(settings.timeout())?;

    let limiter = RateLimiter::new(settings.requests_per_minute, settings.max_concurrent);

    Ok(TextGenerator::new(Arc::new(client))
        .with_policy(settings.retry_policy())
        .with_limiter(limiter)
        .with_sampling(settings.max_tokens, settings.temperature))
}

/// Book generator with a cover stage when enabled and keyed.
///
/// # Errors
///
/// Returns an error if a provider client cannot be built.
#[instrument(skip_all)]
pub fn book_generator(
    config: &ScriptoriumConfig,
    secrets: &Secrets,
) -> ScriptoriumResult<BookGenerator> {
    let text = text_generator(&config.text, &secrets.anthropic_api_key)?;
    let generator = BookGenerator::new(text.clone(), config.pipeline.clone());

    if !config.cover.enabled {
        info!("Cover generation disabled");
        return Ok(generator);
    }

    let Some(key) = secrets.stability_api_key.as_deref() else {
        warn!("No image API key configured, books will have no cover");
        return Ok(generator);
    };

    let image = StabilityClient::new(key)
        .with_host(config.cover.host.clone())
        .with_engine(config.cover.engine.clone())
        .with_timeout(config.text.timeout())?;
    let cover = CoverGenerator::new(text, Arc::new(image), config.cover.screening());

    Ok(generator.with_cover(cover))
}

/// Open the configured storage backend.
///
/// # Errors
///
/// Returns an error if the storage directory cannot be created.
pub fn storage(settings: &StorageSettings) -> ScriptoriumResult<Arc<dyn BookStorage>> {
    scriptorium_storage::open_storage(settings.backend, &settings.path)
}

/// Everything the HTTP service needs.
///
/// # Errors
///
/// Returns an error if the generator or storage cannot be built.
pub fn app_state(config: &ScriptoriumConfig, secrets: &Secrets) -> ScriptoriumResult<AppState> {
    Ok(AppState::new(
        book_generator(config, secrets)?,
        storage(&config.storage)?,
    ))
}
