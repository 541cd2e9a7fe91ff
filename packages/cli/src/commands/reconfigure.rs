use super::{load_state, resolve, state_config, write_state};
use crate::config::Config;
use crate::plugins;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use scribe_state::ReconfigureConfig;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReconfigureArgs {
    /// Saved state to reconfigure
    pub state: PathBuf,

    /// Plugins of the new state (none if omitted)
    #[arg(short, long, value_delimiter = ',')]
    pub plugins: Vec<String>,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn reconfigure(args: ReconfigureArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let state = load_state(&resolve(cwd, &args.state), &state_config(&config)?)?;

    let next = state.reconfigure(&ReconfigureConfig::new().plugins(plugins::plugins(&args.plugins)?))?;

    eprintln!(
        "{} {} → {} plugin(s)",
        "Reconfigured".green().bold(),
        state.plugins().len(),
        next.plugins().len()
    );

    let out = args.out.map(|out| resolve(cwd, &out));
    write_state(&next, &config.ignore, out.as_deref())
}
