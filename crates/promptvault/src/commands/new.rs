//! New command - render a prompt document into the vault

use crate::cli::NewArgs;
use crate::context::Context;
use crate::prompter::Prompter;
use anyhow::{Context as _, Result, bail};
use colored::Colorize;
use promptvault_core::clock::parse_date;
use promptvault_core::template::{FieldName, PromptRenderer, TemplateFields};
use promptvault_core::vault::{validate_name, validate_prompt_name};
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::debug;

/// Create a prompt document
///
/// Field values come from, in order of precedence: command-line flags, the
/// `--from` TOML file, then interactive answers. `--no-input` skips the
/// questions, so rendering fails on whatever is still missing.
pub fn run(args: NewArgs, root: &Path, verbose: bool) -> Result<()> {
    let ctx = Context::new(root, verbose)?;

    let mut fields = flag_fields(&args);
    if let Some(path) = &args.from {
        fields.fill_from(load_fields_file(path)?);
    }
    if let Some(date) = fields.field(FieldName::Date) {
        parse_date(date).with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", date))?;
    }
    if let Some(name) = fields.field(FieldName::Name) {
        validate_prompt_name(name)?;
    }

    let default_version = ctx.vault.config().prompt.default_version.clone();

    let category = if args.no_input {
        if !fields.contains(FieldName::Version) {
            fields.set(FieldName::Version, default_version);
        }
        let Some(category) = args.category else {
            bail!("--category is required with --no-input");
        };
        validate_name(&category)?;
        category
    } else {
        let mut prompter = Prompter::stdio();
        let category = match args.category {
            Some(category) => category,
            None => prompter.choose_category(&ctx.vault.categories()?)?,
        };
        validate_name(&category)?;
        ask_missing(&mut prompter, &mut fields, &default_version)?;
        category
    };

    let document = PromptRenderer::system().render(&fields)?;

    let name = fields.field(FieldName::Name).unwrap_or_default();
    let version = fields.field(FieldName::Version).unwrap_or_default();
    let path = ctx.vault.create_prompt(&category, name, version, &document)?;
    debug!(path = %path.display(), "prompt written");

    println!("{} Prompt created: {}", "✓".green().bold(), path.display());
    print_next_steps(&path);

    Ok(())
}

/// Fields given as command-line flags
fn flag_fields(args: &NewArgs) -> TemplateFields {
    let flags = [
        (FieldName::Name, &args.name),
        (FieldName::Version, &args.version),
        (FieldName::Purpose, &args.purpose),
        (FieldName::Context, &args.context),
        (FieldName::Objective, &args.objective),
        (FieldName::Style, &args.style),
        (FieldName::Tone, &args.tone),
        (FieldName::Audience, &args.audience),
        (FieldName::Response, &args.response),
        (FieldName::PromptText, &args.prompt_text),
        (FieldName::Date, &args.date),
    ];

    let mut fields = TemplateFields::new();
    for (field, value) in flags {
        if let Some(value) = value {
            fields.set(field, value.clone());
        }
    }
    fields
}

/// Read field values from a TOML table of strings
fn load_fields_file(path: &Path) -> Result<TemplateFields> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Ask for every field still missing, in skeleton order
///
/// The date is never asked for; the renderer's clock supplies it. The name is
/// checked as soon as it is answered.
fn ask_missing<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    fields: &mut TemplateFields,
    default_version: &str,
) -> Result<()> {
    println!("\n{} Prompt details:", "→".cyan());

    for field in fields.missing() {
        let answer = match field {
            FieldName::Date => continue,
            FieldName::Version => prompter.ask_with_default("Version", default_version)?,
            _ => prompter.ask(prompt_label(field))?,
        };
        if field == FieldName::Name {
            validate_prompt_name(&answer)?;
        }
        fields.set(field, answer);
    }
    Ok(())
}

fn prompt_label(field: FieldName) -> &'static str {
    match field {
        FieldName::Name => "Prompt name (e.g., 'Customer Support Assistant')",
        FieldName::Version => "Version",
        FieldName::Purpose => "Purpose (one-liner)",
        FieldName::Context => "Context (situation & background)",
        FieldName::Objective => "Objective (specific goal)",
        FieldName::Style => "Style (format & presentation)",
        FieldName::Tone => "Tone (formality level)",
        FieldName::Audience => "Audience (who will use this)",
        FieldName::Response => "Response (expected output format)",
        FieldName::PromptText => "Prompt text",
        FieldName::Date => "Date (YYYY-MM-DD)",
    }
}

fn print_next_steps(path: &Path) {
    println!("\n{} Next steps:", "→".cyan());
    println!("  1. Fill in test cases in {}", path.display());
    println!("  2. Add evaluation results");
    println!("  3. Review COSTAR analysis");
    println!("  4. Commit: git add {}", path.display());
    println!("  5. Create pull request");
}
