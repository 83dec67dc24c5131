use crate::output::print_json;
use clap::Subcommand;
use neuroflow_core::config::ProfileConfig;
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Store an API credential override for the collaborator service
    SetKey {
        /// The API key (stored raw in the profile)
        key: String,
    },
    /// Remove the API credential override
    ClearKey,
    /// Show collaborator settings
    Show,
}

pub fn run(root: &Path, subcmd: ConfigSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ConfigSubcommand::SetKey { key } => set_key(root, &key, json),
        ConfigSubcommand::ClearKey => clear_key(root, json),
        ConfigSubcommand::Show => show(root, json),
    }
}

fn set_key(root: &Path, key: &str, json: bool) -> anyhow::Result<()> {
    let mut app = super::open_app(root)?;
    app.set_api_key_override(key)?;
    if json {
        print_json(&serde_json::json!({ "api_key_override": "set" }))?;
    } else {
        println!("API key override stored.");
    }
    Ok(())
}

fn clear_key(root: &Path, json: bool) -> anyhow::Result<()> {
    let mut app = super::open_app(root)?;
    app.clear_api_key_override()?;
    if json {
        print_json(&serde_json::json!({ "api_key_override": "unset" }))?;
    } else {
        println!("API key override cleared; GEMINI_API_KEY will be used.");
    }
    Ok(())
}

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let app = super::open_app(root)?;
    let config = ProfileConfig::load(root)?;
    let override_state = if app.api_key_override()?.is_some() {
        "set"
    } else {
        "unset"
    };

    if json {
        return print_json(&serde_json::json!({
            "model": config.model,
            "base_url": config.base_url,
            "api_key_override": override_state,
        }));
    }
    println!("Model:            {}", config.model);
    println!("Base URL:         {}", config.base_url);
    println!("API key override: {override_state}");
    Ok(())
}
