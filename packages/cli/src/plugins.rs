//! Built-in plugins available by name

use anyhow::{bail, Result};
use scribe_state::fields::{ActionCounter, LastAction};
use scribe_state::{EditorState, Plugin};

pub const BUILT_IN: &[&str] = &["count", "lastAction"];

/// Plugin whose field is stored under `name`
pub fn plugin(name: &str) -> Result<Plugin> {
    let plugin = match name {
        "count" => Plugin::with_field(name, ActionCounter),
        "lastAction" => Plugin::with_field(name, LastAction),
        other => bail!(
            "Unknown plugin '{}'. Available: {}",
            other,
            BUILT_IN.join(", ")
        ),
    };
    Ok(plugin)
}

pub fn plugins<S: AsRef<str>>(names: &[S]) -> Result<Vec<Plugin>> {
    names.iter().map(|name| plugin(name.as_ref())).collect()
}

/// Human-readable value of a built-in field
pub fn describe(state: &EditorState, key: &str) -> String {
    if let Some(count) = state.field::<u64>(key) {
        return count.to_string();
    }
    match state.field::<Option<String>>(key) {
        Some(Some(kind)) => kind.clone(),
        Some(None) => "-".to_string(),
        None => "?".to_string(),
    }
}
