pub mod ask;
pub mod city;
pub mod config_cmd;
pub mod serve;

use std::path::Path;

use anyhow::Context;
use weatherchat_config::AppConfig;

/// Load the config file (explicit path or the default) plus environment overrides.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    tracing::debug!(path = ?path, "Loading configuration");
    let config = match path {
        Some(path) => AppConfig::load_with_env(path),
        None => AppConfig::load(),
    };
    config.context("Failed to load config")
}
