//! CLI command structure using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "promptvault")]
#[command(version, about = "Create and validate COSTAR prompt documents", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Vault root directory
    #[arg(long, global = true, env = "PROMPTVAULT_ROOT", default_value = ".")]
    pub root: PathBuf,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new prompt document
    New(NewArgs),

    /// Validate the COSTAR structure of a prompt document
    Validate {
        /// Prompt file (relative to the vault root or absolute)
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Override the recommended minimum number of test cases
        #[arg(long, value_name = "N")]
        min_test_cases: Option<usize>,
    },

    /// Show the contribution checklist
    Checklist {
        #[arg(long)]
        json: bool,
    },

    /// List existing categories
    Categories {
        #[arg(long)]
        json: bool,
    },

    /// Print a changelog entry for a version bump
    Changelog {
        /// New version (e.g., "1.1.0")
        #[arg(long)]
        version: String,

        /// Summary of what changed
        #[arg(long)]
        changes: String,

        /// Entry date as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },
}

/// Field values for `new`; anything left out is asked for on stdin
#[derive(Args, Debug, Default)]
pub struct NewArgs {
    /// Category directory (created if it does not exist)
    #[arg(long)]
    pub category: Option<String>,

    /// Prompt name (e.g., "Customer Support Assistant")
    #[arg(long)]
    pub name: Option<String>,

    /// Version (default from vault.toml, else 1.0.0)
    #[arg(long)]
    pub version: Option<String>,

    /// One-line purpose
    #[arg(long)]
    pub purpose: Option<String>,

    /// Situation and background
    #[arg(long)]
    pub context: Option<String>,

    /// Specific goal
    #[arg(long)]
    pub objective: Option<String>,

    /// Format and presentation
    #[arg(long)]
    pub style: Option<String>,

    /// Formality level
    #[arg(long)]
    pub tone: Option<String>,

    /// Who will use this
    #[arg(long)]
    pub audience: Option<String>,

    /// Expected output format
    #[arg(long)]
    pub response: Option<String>,

    /// The prompt text itself
    #[arg(long)]
    pub prompt_text: Option<String>,

    /// Changelog date as YYYY-MM-DD (default: today)
    #[arg(long)]
    pub date: Option<String>,

    /// TOML file with field values (flags take precedence)
    #[arg(long, value_name = "FILE")]
    pub from: Option<PathBuf>,

    /// Never prompt; fail if a required field is missing
    #[arg(long)]
    pub no_input: bool,
}
