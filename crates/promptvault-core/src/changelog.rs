//! Changelog entries for version bumps

use crate::clock::format_date;
use chrono::NaiveDate;

/// Changelog block appended to a prompt document when its version changes
///
/// ```
/// # use chrono::NaiveDate;
/// # use promptvault_core::changelog::changelog_entry;
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// assert_eq!(
///     changelog_entry("1.1.0", "Tightened tone guidance", date),
///     "\n### v1.1.0 (2026-01-15)\n- Tightened tone guidance\n"
/// );
/// ```
pub fn changelog_entry(version: &str, changes: &str, date: NaiveDate) -> String {
    let version = version.trim();
    let version = version.strip_prefix('v').unwrap_or(version);
    format!("\n### v{} ({})\n- {}\n", version, format_date(date), changes.trim())
}
