//! `serve` command handler.

use scriptorium::{ScriptoriumConfig, ScriptoriumResult, Secrets, services};

/// Run the HTTP service until the process is stopped.
pub async fn serve(
    mut config: ScriptoriumConfig,
    host: Option<String>,
    port: Option<u16>,
) -> ScriptoriumResult<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let secrets = Secrets::from_env()?;
    let state = services::app_state(&config, &secrets)?;

    tracing::info!(model = %config.text.model, "Book generator ready. Press Ctrl+C to stop.");
    scriptorium::serve(&config.server.address(), state).await
}
