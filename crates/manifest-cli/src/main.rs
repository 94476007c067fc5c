//! Manifest Manager CLI
//!
//! The command-line interface for reconciling deployed manifests against
//! their templates and managing environment files.

mod cli;
mod commands;
mod error;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands, EnvAction};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} Manifest Manager CLI", "manifest".green().bold());
            println!();
            println!("Run {} for available commands.", "manifest --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Sync {
            project,
            env,
            deployed,
            dry_run,
            json,
        } => commands::sync::run_sync(&project, &env, &deployed, dry_run, json),
        Commands::Render {
            project,
            env,
            strict,
            output,
        } => commands::render::run_render(&project, &env, strict, output.as_deref()),
        Commands::Env { action } => match action {
            EnvAction::List { project, json } => commands::env::run_list(&project, json),
            EnvAction::Get { project, env, key } => commands::env::run_get(&project, &env, &key),
            EnvAction::Set {
                project,
                env,
                key,
                value,
            } => commands::env::run_set(&project, &env, &key, &value),
        },
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "manifest",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
