//! Configuration file management for CourtCoach.
//!
//! Supports reading secrets from `~/.config/courtcoach/secret.json`.

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Root configuration structure for secret.json
#[derive(Debug, Clone, Deserialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub coach: Option<CoachServiceConfig>,
}

/// Coaching service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CoachServiceConfig {
    pub api_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Loads the secret configuration file from ~/.config/courtcoach/secret.json
pub fn load_secret_config() -> Result<SecretConfig, String> {
    let config_path = get_config_path()?;

    if !config_path.exists() {
        return Err(format!(
            "Configuration file not found at: {}",
            config_path.display()
        ));
    }

    let content = fs::read_to_string(&config_path).map_err(|e| {
        format!(
            "Failed to read configuration file at {}: {}",
            config_path.display(),
            e
        )
    })?;

    serde_json::from_str(&content).map_err(|e| {
        format!(
            "Failed to parse configuration file at {}: {}",
            config_path.display(),
            e
        )
    })
}

/// Returns the path to the configuration file: ~/.config/courtcoach/secret.json
fn get_config_path() -> Result<PathBuf, String> {
    let home = dirs::home_dir().ok_or_else(|| "Could not determine home directory".to_string())?;
    Ok(home.join(".config").join("courtcoach").join("secret.json"))
}
