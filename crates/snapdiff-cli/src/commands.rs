use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;
use serde_json::json;
use snapdiff_diff::{
    apply_diff, compute_diff_with, describe_changes_with, structural_equal_with, ChangeSet,
    CompareOptions, Diff, FieldChange,
};
use snapdiff_types::{Record, Value};

use crate::cli::*;
use crate::config::Config;

const STDIN: &str = "-";

/// Exit statuses, following `cmp`/`diff`.
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_DIFFERENT: u8 = 1;
pub const EXIT_ERROR: u8 = 2;

/// Rendered output of a command and the status the process exits with.
#[derive(Debug)]
pub struct Report {
    pub text: String,
    pub status: u8,
}

impl Report {
    fn success(text: String) -> Self {
        Self { text, status: EXIT_SUCCESS }
    }
}

/// Run a command, print its output, and return the exit status.
/// Failures are printed to stderr and map to [`EXIT_ERROR`].
pub fn run_command(cli: Cli) -> u8 {
    match execute(&cli) {
        Ok(report) => {
            println!("{}", report.text);
            report.status
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            EXIT_ERROR
        }
    }
}

pub fn execute(cli: &Cli) -> anyhow::Result<Report> {
    let options = Config::resolve(cli)?;
    match &cli.command {
        Command::Diff(args) => cmd_diff(args, cli.format, &options),
        Command::Equal(args) => cmd_equal(args, cli.format, &options),
        Command::Apply(args) => cmd_apply(args, cli.format),
    }
}

fn cmd_diff(args: &DiffArgs, format: OutputFormat, options: &CompareOptions) -> anyhow::Result<Report> {
    let (current_path, updated_path) = args.inputs();
    ensure_single_stdin(&[current_path.unwrap_or_default(), updated_path])?;

    let current = current_path.map(read_record).transpose()?;
    let updated = read_record(updated_path)?;

    let text = if args.changes {
        render_changes(&describe_changes_with(current.as_ref(), &updated, options), format)?
    } else {
        render_diff(&compute_diff_with(current.as_ref(), &updated, options), format)?
    };
    Ok(Report::success(text))
}

fn cmd_equal(args: &EqualArgs, format: OutputFormat, options: &CompareOptions) -> anyhow::Result<Report> {
    ensure_single_stdin(&[&args.left, &args.right])?;
    let left = Value::from(read_document(&args.left)?);
    let right = Value::from(read_document(&args.right)?);

    let equal = structural_equal_with(&left, &right, options);
    let text = match format {
        OutputFormat::Json => json!({ "equal": equal }).to_string(),
        OutputFormat::Text if equal => "equal".green().bold().to_string(),
        OutputFormat::Text => "different".red().bold().to_string(),
    };
    let status = if equal { EXIT_SUCCESS } else { EXIT_DIFFERENT };
    Ok(Report { text, status })
}

fn cmd_apply(args: &ApplyArgs, format: OutputFormat) -> anyhow::Result<Report> {
    ensure_single_stdin(&[&args.current, &args.diff])?;
    let current = read_record(&args.current)?;
    let diff = Diff::from(read_record(&args.diff)?);

    let merged = apply_diff(Some(&current), &diff);
    let text = match format {
        OutputFormat::Json => merged.to_json()?.to_string(),
        OutputFormat::Text => merged.to_json_string_pretty()?,
    };
    Ok(Report::success(text))
}

fn ensure_single_stdin(paths: &[&str]) -> anyhow::Result<()> {
    if paths.iter().filter(|p| **p == STDIN).count() > 1 {
        bail!("only one input can be read from stdin");
    }
    Ok(())
}

fn read_document(path: &str) -> anyhow::Result<serde_json::Value> {
    let text = if path == STDIN {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        buf
    } else {
        std::fs::read_to_string(Path::new(path)).with_context(|| format!("reading {path}"))?
    };
    serde_json::from_str(&text).with_context(|| format!("parsing JSON from {path}"))
}

fn read_record(path: &str) -> anyhow::Result<Record> {
    let json = read_document(path)?;
    Record::try_from(json).with_context(|| format!("{path} is not a snapshot"))
}

pub fn render_diff(diff: &Diff, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(diff.as_record().to_json_string_pretty()?),
        OutputFormat::Text if diff.is_empty() => Ok("No changes.".into()),
        OutputFormat::Text => Ok(diff
            .iter()
            .map(|(key, value)| format!("{}: {}", key.bold(), value))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

pub fn render_changes(changes: &ChangeSet, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let entries = changes
                .changes
                .iter()
                .map(change_to_json)
                .collect::<anyhow::Result<Vec<_>>>()?;
            Ok(serde_json::to_string_pretty(&entries)?)
        }
        OutputFormat::Text if changes.is_empty() => Ok("No changes.".into()),
        OutputFormat::Text => {
            let mut lines: Vec<String> = changes
                .changes
                .iter()
                .map(|change| match change {
                    FieldChange::Added { key, value } => {
                        format!("{} {}: {}", "+".green(), key.bold(), value)
                    }
                    FieldChange::Modified { key, old, new } => {
                        format!("{} {}: {} → {}", "~".yellow(), key.bold(), old, new)
                    }
                    FieldChange::Removed { key, old } => {
                        format!("{} {}: {}", "-".red(), key.bold(), old)
                    }
                })
                .collect();
            lines.push(format!(
                "{} added, {} modified, {} removed",
                changes.additions(),
                changes.modifications(),
                changes.removals()
            ));
            Ok(lines.join("\n"))
        }
    }
}

fn change_to_json(change: &FieldChange) -> anyhow::Result<serde_json::Value> {
    Ok(match change {
        FieldChange::Added { key, value } => {
            json!({ "op": "added", "key": key, "value": value.to_json()? })
        }
        FieldChange::Modified { key, old, new } => {
            json!({ "op": "modified", "key": key, "old": old.to_json()?, "new": new.to_json()? })
        }
        FieldChange::Removed { key, old } => {
            json!({ "op": "removed", "key": key, "old": old.to_json()? })
        }
    })
}
