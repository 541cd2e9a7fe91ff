use super::{load_config, resolve, state_config, write_state};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use scribe_state::EditorState;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Initial paragraph text
    #[arg(short, long)]
    pub text: Option<String>,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Plugins to enable, overriding the config file
    #[arg(short, long, value_delimiter = ',')]
    pub plugins: Option<Vec<String>>,
}

pub fn new(args: NewArgs, cwd: &str) -> Result<()> {
    let config = load_config(cwd, args.plugins)?;

    let mut state_config = state_config(&config)?;
    if let Some(text) = args.text.as_deref().filter(|text| !text.is_empty()) {
        let schema = scribe_model::Schema::basic();
        let paragraph = schema.node("paragraph", vec![schema.text(text)?])?;
        state_config = state_config.doc(schema.node("doc", vec![paragraph])?);
    }
    let state = EditorState::create(&state_config)?;

    eprintln!(
        "{} state with {} plugin(s)",
        "Created".green().bold(),
        config.plugins.len()
    );

    let out = args.out.map(|out| resolve(cwd, &out));
    write_state(&state, &config.ignore, out.as_deref())
}
