pub mod archetype;
pub mod calendar;
pub mod chat;
pub mod config;
pub mod init;
pub mod journey;
pub mod quiz;
pub mod reset;
pub mod session;

use anyhow::Context;
use neuroflow_ai::{ClientConfig, GenAiClient};
use neuroflow_core::app::App;
use neuroflow_core::config::ProfileConfig;
use neuroflow_core::store::{FileStore, Store};
use std::path::Path;

/// Open the application root over the initialized profile.
pub fn open_app(root: &Path) -> anyhow::Result<App<FileStore>> {
    let store = FileStore::open(root)?;
    Ok(App::new(store))
}

/// Build the collaborator client: profile config for endpoint/model, the
/// store override (then `GEMINI_API_KEY`) for the credential.
pub fn build_client<S: Store>(root: &Path, app: &App<S>) -> anyhow::Result<GenAiClient> {
    let config = ProfileConfig::load(root).context("failed to load profile config")?;
    let api_key = match app.api_key_override()? {
        Some(key) => key,
        None => std::env::var("GEMINI_API_KEY").map_err(|_| {
            anyhow::anyhow!(
                "no API key: set GEMINI_API_KEY or run 'neuroflow config set-key <key>'"
            )
        })?,
    };
    Ok(GenAiClient::new(ClientConfig {
        api_key,
        model: config.model,
        base_url: config.base_url,
    }))
}

/// Each collaborator call owns a fresh runtime and blocks on a single
/// request, so calls are strictly sequential: at most one in flight.
pub fn runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new().context("failed to start tokio runtime")
}
