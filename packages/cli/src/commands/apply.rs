use super::{load_config, load_state, resolve, state_config, write_state};
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use scribe_state::{Action, EditorState, Selection};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Saved state to start from
    pub state: PathBuf,

    /// JSON file holding an array of actions
    #[arg(short, long)]
    pub script: PathBuf,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Plugins the state was saved with, overriding the config file
    #[arg(short, long, value_delimiter = ',')]
    pub plugins: Option<Vec<String>>,
}

/// One entry of an action script
///
/// ```text
/// [{"insertText": "hi"}, {"delete": [1, 2]}, {"select": [1, 3]}, {"custom": "save"}]
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScriptAction {
    /// Replace the selection with text
    InsertText(String),
    /// Delete a `[from, to]` range
    Delete([usize; 2]),
    /// Select an `[anchor, head]` range
    Select([usize; 2]),
    /// Action with no document effect
    Custom(String),
}

impl ScriptAction {
    /// Action to dispatch against `state`
    pub fn to_action(&self, state: &EditorState) -> Result<Action> {
        let action = match self {
            ScriptAction::InsertText(text) => state.tr().insert_text(text)?.action(),
            ScriptAction::Delete([from, to]) => state.tr().delete(*from, *to)?.action(),
            ScriptAction::Select([anchor, head]) => Selection::new(*anchor, *head).action(),
            ScriptAction::Custom(kind) => Action::custom(kind.as_str()),
        };
        Ok(action)
    }
}

/// Run `script` from `state`, returning the final state
pub fn run_script(state: EditorState, script: &[ScriptAction]) -> Result<EditorState> {
    script
        .iter()
        .enumerate()
        .try_fold(state, |state, (index, step)| {
            let action = step.to_action(&state)?;
            state
                .apply_action(&action)
                .with_context(|| format!("Action {} ({}) failed", index, action.kind()))
        })
}

pub fn apply(args: ApplyArgs, cwd: &str) -> Result<()> {
    let config = load_config(cwd, args.plugins)?;
    let state_config = state_config(&config)?;
    let state = load_state(&resolve(cwd, &args.state), &state_config)?;

    let script_path = resolve(cwd, &args.script);
    let content = fs::read_to_string(&script_path)
        .with_context(|| format!("Failed to read {}", script_path.display()))?;
    let script: Vec<ScriptAction> = serde_json::from_str(&content)
        .with_context(|| format!("{} is not an action script", script_path.display()))?;

    let state = run_script(state, &script)?;
    info!(actions = script.len(), "Applied script");

    eprintln!(
        "{} {} action(s)",
        "Applied".green().bold(),
        script.len()
    );

    let out = args.out.map(|out| resolve(cwd, &out));
    write_state(&state, &config.ignore, out.as_deref())
}
