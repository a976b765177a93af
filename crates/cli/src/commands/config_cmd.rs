//! `weatherchat config` — Show the effective configuration.

use std::path::Path;

use weatherchat_config::AppConfig;

pub fn show(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let source = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| AppConfig::config_dir().join("config.toml"));

    println!("# {}", source.display());
    println!("{}", config.redacted_toml());
    if !config.has_api_key() {
        println!("# ⚠️  No API key set (set OPENAI_API_KEY in the environment or .env)");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn config_path_is_valid() {
        let path = weatherchat_config::AppConfig::config_dir().join("config.toml");
        assert!(path.to_str().unwrap().contains(".weatherchat"));
    }
}
