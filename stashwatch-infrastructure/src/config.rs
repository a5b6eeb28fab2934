use std::env;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use stashwatch_domain::RuntimeConfig;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub use_beta: bool,
    pub default_league: String,
    pub item_types_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            use_beta: false,
            default_league: "Standard".to_string(),
            item_types_path: "./item_types.json".to_string(),
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("STASHWATCH_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        if !Path::new(&path).exists() {
            warn!("config.toml not found, using defaults");
            let mut config = AppConfig::default();
            config.apply_env_overrides();
            return Ok(config);
        }
        let content = fs::read_to_string(&path).await?;
        let mut config: AppConfig = toml::from_str(&content)?;
        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("STASHWATCH_USE_BETA") {
            self.use_beta = value == "1" || value.eq_ignore_ascii_case("true");
        }
        if let Ok(value) = env::var("STASHWATCH_LEAGUE") {
            self.default_league = value;
        }
    }

    pub fn runtime(&self) -> RuntimeConfig {
        RuntimeConfig {
            use_beta: self.use_beta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_config_file_shape() {
        let config: AppConfig = toml::from_str(
            "use_beta = true\ndefault_league = \"Harbinger\"\nitem_types_path = \"./types.json\"\n",
        )
        .unwrap();
        assert!(config.use_beta);
        assert_eq!(config.default_league, "Harbinger");
        assert!(config.runtime().use_beta);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: AppConfig = toml::from_str("use_beta = true\n").unwrap();
        assert_eq!(config.default_league, "Standard");
        assert_eq!(config.item_types_path, "./item_types.json");
    }
}
