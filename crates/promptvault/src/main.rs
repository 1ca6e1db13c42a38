mod cli;
mod commands;
mod context;
mod output;
mod prompter;

use clap::Parser;
use cli::{Cli, Commands};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let root = cli.root.as_path();
    let result = match cli.command {
        None => commands::welcome::run(root, cli.verbose).map(|()| ExitCode::SUCCESS),
        Some(Commands::New(args)) => {
            commands::new::run(args, root, cli.verbose).map(|()| ExitCode::SUCCESS)
        }
        Some(Commands::Validate {
            file,
            json,
            min_test_cases,
        }) => commands::validate::run(file, json, min_test_cases, root, cli.verbose).map(|valid| {
            // Invalid documents are a normal outcome, reported through the exit code only
            if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }),
        Some(Commands::Checklist { json }) => {
            commands::checklist::run(json).map(|()| ExitCode::SUCCESS)
        }
        Some(Commands::Categories { json }) => {
            commands::categories::run(json, root, cli.verbose).map(|()| ExitCode::SUCCESS)
        }
        Some(Commands::Changelog {
            version,
            changes,
            date,
        }) => commands::changelog::run(version, changes, date).map(|()| ExitCode::SUCCESS),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Logs go to stderr; `RUST_LOG` takes precedence over `--verbose`
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
