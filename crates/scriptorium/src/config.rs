//! Layered configuration.
//!
//! Sources, later ones overriding earlier ones:
//! 1. Bundled defaults (`scriptorium.toml` shipped with the crate)
//! 2. `~/.config/scriptorium/scriptorium.toml`
//! 3. `./scriptorium.toml`
//! 4. An explicit `--config` file
//! 5. Environment variables such as `SCRIPTORIUM__SERVER__PORT=9000`
//!
//! API keys never live in these files; see [`Secrets`].

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use scriptorium_error::{ConfigError, ScriptoriumError, ScriptoriumResult};
use scriptorium_models::{
    ANTHROPIC_API_KEY_VAR, DEFAULT_ANTHROPIC_MODEL, DEFAULT_ANTHROPIC_URL,
    DEFAULT_STABILITY_ENGINE, DEFAULT_STABILITY_HOST, STABILITY_API_KEY_VAR,
};
use scriptorium_pipeline::{CoverSettings, PipelineSettings};
use scriptorium_rate_limit::RetryPolicy;
use scriptorium_storage::StorageBackend;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../scriptorium.toml");

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "SCRIPTORIUM";

/// Top-level Scriptorium configuration.
///
/// # Example
///
/// ```no_run
/// use scriptorium::ScriptoriumConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ScriptoriumConfig::load(None)?;
/// println!("Listening on {}", config.server.address());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScriptoriumConfig {
    /// Text model connection and retry budget
    #[serde(default)]
    pub text: TextSettings,
    /// Chapter generation
    #[serde(default)]
    pub pipeline: PipelineSettings,
    /// Cover image generation
    #[serde(default)]
    pub cover: CoverConfig,
    /// Where books are kept
    #[serde(default)]
    pub storage: StorageSettings,
    /// HTTP listener
    #[serde(default)]
    pub server: ServerSettings,
}

impl ScriptoriumConfig {
    /// Load every configuration layer.
    ///
    /// User files are optional and skipped when absent; `path`, when given,
    /// must exist.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a source cannot be read or the merged
    /// values do not deserialize.
    #[instrument]
    pub fn load(path: Option<&Path>) -> ScriptoriumResult<Self> {
        debug!("Loading configuration");

        let mut builder = Self::defaults();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/scriptorium/scriptorium.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("scriptorium").required(false));

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

        Self::finish(builder)
    }

    /// Bundled defaults overlaid with a TOML document.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if `toml` does not parse or deserialize.
    pub fn from_toml_str(toml: &str) -> ScriptoriumResult<Self> {
        Self::finish(Self::defaults().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn defaults() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> ScriptoriumResult<Self> {
        builder
            .build()
            .map_err(|e| {
                ScriptoriumError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ScriptoriumError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}

/// `[text]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSettings {
    /// Messages API base URL
    #[serde(default = "default_text_url")]
    pub base_url: String,
    /// Model identifier
    #[serde(default = "default_text_model")]
    pub model: String,
    /// Token budget per completion
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Attempts per call while rate limited
    #[serde(default = "default_text_attempts")]
    pub max_attempts: usize,
    /// Longest single backoff wait, in seconds
    #[serde(default = "default_max_wait_secs")]
    pub max_wait_secs: u64,
    /// Per-request HTTP timeout, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Requests per minute across all books; unbounded when unset
    #[serde(default)]
    pub requests_per_minute: Option<u32>,
    /// Calls in flight at once; unbounded when unset
    #[serde(default)]
    pub max_concurrent: Option<u32>,
}

fn default_text_url() -> String {
    DEFAULT_ANTHROPIC_URL.to_string()
}

fn default_text_model() -> String {
    DEFAULT_ANTHROPIC_MODEL.to_string()
}

fn default_max_tokens() -> u32 {
    3000
}

fn default_temperature() -> f32 {
    0.7
}

fn default_text_attempts() -> usize {
    5
}

fn default_max_wait_secs() -> u64 {
    60
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            base_url: default_text_url(),
            model: default_text_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            max_attempts: default_text_attempts(),
            max_wait_secs: default_max_wait_secs(),
            timeout_secs: default_timeout_secs(),
            requests_per_minute: None,
            max_concurrent: None,
        }
    }
}

impl TextSettings {
    /// Retry policy for text calls.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, Duration::from_secs(self.max_wait_secs))
    }

    /// HTTP timeout as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// `[cover]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverConfig {
    /// Generate a cover when an image key is present
    #[serde(default = "default_cover_enabled")]
    pub enabled: bool,
    /// Image API host
    #[serde(default = "default_cover_host")]
    pub host: String,
    /// Image engine identifier
    #[serde(default = "default_cover_engine")]
    pub engine: String,
    /// Longest description sent to the image model
    #[serde(default = "default_cover_prompt_chars")]
    pub max_prompt_chars: usize,
    /// Case-insensitive terms that skip the cover
    #[serde(default)]
    pub disallowed_terms: Vec<String>,
}

fn default_cover_enabled() -> bool {
    true
}

fn default_cover_host() -> String {
    DEFAULT_STABILITY_HOST.to_string()
}

fn default_cover_engine() -> String {
    DEFAULT_STABILITY_ENGINE.to_string()
}

fn default_cover_prompt_chars() -> usize {
    CoverSettings::default().max_prompt_chars
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            enabled: default_cover_enabled(),
            host: default_cover_host(),
            engine: default_cover_engine(),
            max_prompt_chars: default_cover_prompt_chars(),
            disallowed_terms: vec![],
        }
    }
}

impl CoverConfig {
    /// Prompt screening rules for the cover generator.
    pub fn screening(&self) -> CoverSettings {
        CoverSettings {
            max_prompt_chars: self.max_prompt_chars,
            disallowed_terms: self.disallowed_terms.clone(),
        }
    }
}

/// `[storage]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Backend kind
    #[serde(default)]
    pub backend: StorageBackend,
    /// Directory for the filesystem backend
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("books")
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_storage_path(),
        }
    }
}

/// `[server]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    /// `host:port` for binding.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// API keys read from the environment.
#[derive(Clone, PartialEq, Eq)]
pub struct Secrets {
    /// Text model key
    pub anthropic_api_key: String,
    /// Image model key; covers are skipped without it
    pub stability_api_key: Option<String>,
}

impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets")
            .field("anthropic_api_key", &"<redacted>")
            .field(
                "stability_api_key",
                &self.stability_api_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl Secrets {
    /// Read keys from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when `ANTHROPIC_API_KEY` is unset or blank.
    pub fn from_env() -> ScriptoriumResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read keys through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when the text model key is missing or blank.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ScriptoriumResult<Self> {
        let present = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let anthropic_api_key = present(ANTHROPIC_API_KEY_VAR).ok_or_else(|| {
            ConfigError::new(format!("{} environment variable not set", ANTHROPIC_API_KEY_VAR))
        })?;

        Ok(Self {
            anthropic_api_key,
            stability_api_key: present(STABILITY_API_KEY_VAR),
        })
    }
}
