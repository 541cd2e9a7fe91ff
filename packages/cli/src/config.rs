use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "scribe.config.json";

/// Scribe configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Built-in plugins to enable, by name
    #[serde(default = "default_plugins")]
    pub plugins: Vec<String>,

    /// Field keys left out when writing states
    #[serde(default)]
    pub ignore: Vec<String>,
}

fn default_plugins() -> Vec<String> {
    vec!["count".to_string()]
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            plugins: default_plugins(),
            ignore: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "plugins": ["count", "lastAction"],
            "ignore": ["count"]
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.plugins, vec!["count", "lastAction"]);
        assert_eq!(config.ignore, vec!["count"]);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.plugins, vec!["count"]);
        assert!(config.ignore.is_empty());
    }

    #[test]
    fn test_load_without_file() {
        let dir = std::env::temp_dir().join("scribe-config-missing");
        let config = Config::load(&dir.display().to_string()).unwrap();
        assert_eq!(config.plugins, vec!["count"]);
    }
}
