//! Checklist command - what a contribution needs

use crate::output::print_json;
use anyhow::Result;
use colored::Colorize;
use promptvault_core::checklist::CONTRIBUTION_CHECKLIST;

pub fn run(json: bool) -> Result<()> {
    if json {
        return print_json(&CONTRIBUTION_CHECKLIST);
    }

    println!("{} Contribution checklist", "✓".green().bold());
    for (i, entry) in CONTRIBUTION_CHECKLIST.iter().enumerate() {
        println!("\n{}. {}", i + 1, entry.item.bold());
        println!("   └─ {}", entry.description);
    }
    println!("\nReview CONTRIBUTING.md for detailed guidelines.");

    Ok(())
}
