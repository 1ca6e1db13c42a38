//! Categories command - list category directories in the vault

use crate::context::Context;
use crate::output::print_json;
use anyhow::Result;
use colored::Colorize;
use serde_json::json;
use std::path::Path;

pub fn run(json: bool, root: &Path, verbose: bool) -> Result<()> {
    let ctx = Context::new(root, verbose)?;
    let categories = ctx.vault.categories()?;

    if json {
        print_json(&json!({
            "root": ctx.vault.root().display().to_string(),
            "categories": categories,
            "count": categories.len(),
        }))?;
    } else {
        output_categories_human(&categories, ctx.vault.root(), verbose);
    }

    Ok(())
}

/// Output categories in human-readable format
pub fn output_categories_human(categories: &[String], root: &Path, verbose: bool) {
    if categories.is_empty() {
        println!("{} No categories found", "!".yellow());
        println!("\n{} Create one with:", "→".cyan());
        println!("  promptvault new --category <name>");
        return;
    }

    println!("{} Available categories:", "→".cyan());
    for (i, category) in categories.iter().enumerate() {
        println!("  {}. {}", i + 1, category);
        if verbose {
            println!("     {}", root.join(category).display());
        }
    }
}
