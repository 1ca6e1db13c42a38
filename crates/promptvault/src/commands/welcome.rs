//! Default screen when no subcommand is given

use crate::commands::categories::output_categories_human;
use crate::context::Context;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::warn;

pub fn run(root: &Path, verbose: bool) -> Result<()> {
    let ctx = Context::new(root, verbose)?;

    println!("{}", "PromptVault Repository Update Assistant".bold());
    println!("\nWelcome! This tool helps you contribute to PromptVault.\n");

    let categories = ctx.vault.categories().unwrap_or_else(|e| {
        warn!("Could not scan categories: {}", e);
        Vec::new()
    });
    output_categories_human(&categories, ctx.vault.root(), verbose);

    println!("\nUsage:");
    println!("  promptvault new");
    println!("  promptvault validate <FILE>");
    println!("  promptvault checklist");
    println!("  promptvault --help");

    Ok(())
}
