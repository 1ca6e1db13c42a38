//! Changelog command - print an entry for a version bump

use crate::output::print_text;
use anyhow::{Context as _, Result};
use promptvault_core::changelog::changelog_entry;
use promptvault_core::clock::{Clock, SystemClock, parse_date};

pub fn run(version: String, changes: String, date: Option<String>) -> Result<()> {
    let date = match date {
        Some(date) => parse_date(&date)
            .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", date))?,
        None => SystemClock.today(),
    };

    print_text(&changelog_entry(&version, &changes, date))?;
    Ok(())
}
