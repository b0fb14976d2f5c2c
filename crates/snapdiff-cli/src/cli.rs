use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "snapdiff",
    about = "Partial-update diffs between JSON snapshots",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with a [compare] table
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Treat null and missing fields as equal
    #[arg(long, global = true)]
    pub loose_nulls: bool,

    /// Treat NaN as equal to NaN
    #[arg(long, global = true)]
    pub nan_equal: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the fields of UPDATED that differ from CURRENT
    Diff(DiffArgs),
    /// Compare two JSON documents for deep equality
    Equal(EqualArgs),
    /// Overlay a diff onto a snapshot
    Apply(ApplyArgs),
}

/// `snapdiff diff [CURRENT] UPDATED`. Use `-` for stdin.
#[derive(Args)]
pub struct DiffArgs {
    /// Previous snapshot, or the updated one when given alone
    pub first: String,
    /// Updated snapshot
    pub second: Option<String>,
    /// Report added, modified and removed fields instead of the payload
    #[arg(long)]
    pub changes: bool,
}

impl DiffArgs {
    /// `(current, updated)`; a lone path is the updated snapshot.
    pub fn inputs(&self) -> (Option<&str>, &str) {
        match &self.second {
            Some(updated) => (Some(self.first.as_str()), updated.as_str()),
            None => (None, self.first.as_str()),
        }
    }
}

#[derive(Args)]
pub struct EqualArgs {
    pub left: String,
    pub right: String,
}

#[derive(Args)]
pub struct ApplyArgs {
    pub current: String,
    pub diff: String,
}
