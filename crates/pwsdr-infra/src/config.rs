//! Configuration loader for the SDR agent.
//!
//! Reads `config.toml` from the data directory and deserializes it into
//! [`AgentConfig`]. A missing or malformed file falls back to defaults.

use std::path::Path;

use pwsdr_types::config::AgentConfig;

/// Load configuration from `{data_dir}/config.toml`.
///
/// - Missing file: [`AgentConfig::default()`], logged at debug.
/// - Unreadable or unparsable file: defaults, logged at warn.
pub async fn load_agent_config(data_dir: &Path) -> AgentConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return AgentConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return AgentConfig::default();
        }
    };

    match toml::from_str::<AgentConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            AgentConfig::default()
        }
    }
}
