mod commands;
mod config;
mod plugins;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{apply, new, reconfigure, show, ApplyArgs, NewArgs, ReconfigureArgs, ShowArgs};
use tracing_subscriber::EnvFilter;

/// Scribe CLI - create, edit and inspect editor states
#[derive(Parser, Debug)]
#[command(name = "scribe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log state operations to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new editor state
    New(NewArgs),

    /// Apply a script of actions to a saved state
    Apply(ApplyArgs),

    /// Swap the plugin set of a saved state
    Reconfigure(ReconfigureArgs),

    /// Print a saved state
    Show(ShowArgs),
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| {
            let cwd = cwd.display().to_string();
            match cli.command {
                Command::New(args) => new(args, &cwd),
                Command::Apply(args) => apply(args, &cwd),
                Command::Reconfigure(args) => reconfigure(args, &cwd),
                Command::Show(args) => show(args, &cwd),
            }
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
