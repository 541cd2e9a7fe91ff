pub mod apply;
pub mod new;
pub mod reconfigure;
pub mod show;

pub use apply::{apply, ApplyArgs};
pub use new::{new, NewArgs};
pub use reconfigure::{reconfigure, ReconfigureArgs};
pub use show::{show, ShowArgs};

use crate::config::Config;
use crate::plugins;
use anyhow::{Context, Result};
use colored::Colorize;
use scribe_model::Schema;
use scribe_state::{EditorState, SerializeOptions, StateConfig};
use std::fs;
use std::path::{Path, PathBuf};

/// Load the config file, letting `--plugins` override its plugin list
pub(crate) fn load_config(cwd: &str, plugins: Option<Vec<String>>) -> Result<Config> {
    let mut config = Config::load(cwd)?;
    if let Some(plugins) = plugins {
        config.plugins = plugins;
    }
    Ok(config)
}

/// State configuration for the plugins named in `config`
pub(crate) fn state_config(config: &Config) -> Result<StateConfig> {
    Ok(StateConfig::new()
        .schema(Schema::basic())
        .plugins(plugins::plugins(&config.plugins)?))
}

/// Resolve `path` against the working directory
pub(crate) fn resolve(cwd: &str, path: &Path) -> PathBuf {
    PathBuf::from(cwd).join(path)
}

pub(crate) fn load_state(path: &Path, config: &StateConfig) -> Result<EditorState> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let json: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    let state = EditorState::from_json(config, &json)
        .with_context(|| format!("{} is not a saved state", path.display()))?;
    Ok(state)
}

/// Write a state as JSON to `out`, or to stdout when `out` is `None`
pub(crate) fn write_state(state: &EditorState, ignore: &[String], out: Option<&Path>) -> Result<()> {
    let json = state.to_json(&SerializeOptions::new().ignore(ignore.iter().cloned()))?;
    let text = serde_json::to_string_pretty(&json)?;

    match out {
        Some(path) => {
            fs::write(path, format!("{}\n", text))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("  {} Wrote {}", "✓".green(), path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_state::{Action, ReconfigureConfig};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("scribe-cli-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_plugins_flag_overrides_config() {
        let dir = scratch_dir("override");
        let cwd = dir.display().to_string();

        assert_eq!(load_config(&cwd, None).unwrap().plugins, vec!["count"]);
        let config = load_config(&cwd, Some(vec!["lastAction".to_string()])).unwrap();
        assert_eq!(config.plugins, vec!["lastAction"]);
    }

    #[test]
    fn test_reconfigured_state_loads_with_its_plugins() {
        let dir = scratch_dir("reload");
        let cwd = dir.display().to_string();
        let path = dir.join("state.json");

        let counted = EditorState::create(&state_config(&Config::default()).unwrap()).unwrap();
        let last_action = plugins::plugins(&["lastAction"]).unwrap();
        let reconfigured = counted
            .reconfigure(&ReconfigureConfig::new().plugins(last_action))
            .unwrap();
        write_state(&reconfigured, &[], Some(&path)).unwrap();

        let config = load_config(&cwd, Some(vec!["lastAction".to_string()])).unwrap();
        let loaded = load_state(&path, &state_config(&config).unwrap()).unwrap();
        let keys: Vec<&str> = loaded.field_keys().collect();
        assert_eq!(keys, vec!["lastAction"]);

        let next = loaded.apply_action(&Action::custom("save")).unwrap();
        assert_eq!(plugins::describe(&next, "lastAction"), "save");
        assert!(!next.has_field("count"));
    }
}
