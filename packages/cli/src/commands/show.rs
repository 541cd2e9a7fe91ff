use super::{load_config, load_state, resolve, state_config};
use crate::plugins;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Saved state to print
    pub state: PathBuf,

    /// Plugins the state was saved with, overriding the config file
    #[arg(short, long, value_delimiter = ',')]
    pub plugins: Option<Vec<String>>,
}

pub fn show(args: ShowArgs, cwd: &str) -> Result<()> {
    let config = load_config(cwd, args.plugins)?;
    let state = load_state(&resolve(cwd, &args.state), &state_config(&config)?)?;
    let selection = state.selection();

    println!("{}", "Document".bright_blue().bold());
    println!("  {}", state.doc());
    println!("  text: {:?}", state.doc().text_content());
    println!();
    println!("{}", "Selection".bright_blue().bold());
    println!("  anchor {} head {}", selection.anchor, selection.head);
    println!();
    println!("{}", "Fields".bright_blue().bold());
    for key in state.field_keys() {
        println!("  {} = {}", key.bright_white(), plugins::describe(&state, key));
    }

    Ok(())
}
