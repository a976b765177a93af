//! `weatherchat serve` — Start the HTTP API server.

use std::path::Path;

use anyhow::{Context, anyhow};
use weatherchat_config::AppConfig;

pub async fn run(config_path: Option<&Path>, port_override: Option<u16>) -> anyhow::Result<()> {
    let mut config = super::load_config(config_path)?;
    apply_port(&mut config, port_override)?;

    println!("🌤️  weatherchat gateway");
    println!("   Listening: {}:{}", config.gateway.host, config.gateway.port);
    println!("   Model:     {}", config.chat.model);
    println!(
        "   API key:   {}",
        if config.has_api_key() { "configured" } else { "missing" }
    );

    weatherchat_gateway::start(config)
        .await
        .map_err(|e| anyhow!("Gateway failed: {e}"))
}

/// Apply `--port` and re-run config validation on the result.
fn apply_port(config: &mut AppConfig, port_override: Option<u16>) -> anyhow::Result<()> {
    if let Some(port) = port_override {
        config.gateway.port = port;
        config.validate().context("Invalid --port")?;
    }
    Ok(())
}
