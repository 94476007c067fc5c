//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Manifest Manager - Reconcile deployed manifests with their templates
#[derive(Parser, Debug)]
#[command(name = "manifest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Synchronize environment values from a deployed manifest
    ///
    /// Matches the deployed manifest against the project's template and
    /// writes drifted placeholder values back to `env/.env.<name>`.
    ///
    /// Examples:
    ///   manifest sync -e dev --deployed build/manifest.json
    ///   manifest sync -e prod --deployed export.json --dry-run
    Sync {
        /// Project root directory
        #[arg(long, default_value = ".")]
        project: PathBuf,

        /// Environment name to update
        #[arg(short, long)]
        env: String,

        /// Path of the deployed manifest JSON
        #[arg(long)]
        deployed: PathBuf,

        /// Compute the update set without writing it
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Render the template with an environment's values
    Render {
        /// Project root directory
        #[arg(long, default_value = ".")]
        project: PathBuf,

        /// Environment name to render with
        #[arg(short, long)]
        env: String,

        /// Fail if any placeholder has no value
        #[arg(long)]
        strict: bool,

        /// Write the rendered manifest here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Manage environment files
    Env {
        /// Env action to perform
        #[command(subcommand)]
        action: EnvAction,
    },

    /// Generate shell completions
    ///
    /// Outputs completion script for your shell.
    ///
    /// Examples:
    ///   manifest completions bash > ~/.local/share/bash-completion/completions/manifest
    ///   manifest completions zsh > ~/.zfunc/_manifest
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Environment store actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum EnvAction {
    /// List the environments of a project
    List {
        /// Project root directory
        #[arg(long, default_value = ".")]
        project: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print one value from an environment
    Get {
        /// Project root directory
        #[arg(long, default_value = ".")]
        project: PathBuf,

        /// Environment name
        #[arg(short, long)]
        env: String,

        /// Key to read
        key: String,
    },

    /// Set one value in an environment
    Set {
        /// Project root directory
        #[arg(long, default_value = ".")]
        project: PathBuf,

        /// Environment name
        #[arg(short, long)]
        env: String,

        /// Key to write
        key: String,

        /// Value to store
        value: String,
    },
}
