use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use snapdiff_diff::{CompareOptions, NanPolicy, NullPolicy};

use crate::cli::Cli;

/// Contents of a `snapdiff.toml` file.
///
/// ```toml
/// [compare]
/// nulls = "loose"   # or "strict"
/// nan = "equal"     # or "distinct"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub compare: CompareOptions,
}

impl Config {
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid snapdiff config")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Resolve the effective comparison options: the config file (if any)
    /// with command-line flags taking precedence.
    pub fn resolve(cli: &Cli) -> anyhow::Result<CompareOptions> {
        let mut options = match &cli.config {
            Some(path) => Self::load(path)?.compare,
            None => CompareOptions::default(),
        };
        if cli.loose_nulls {
            options.nulls = NullPolicy::Loose;
        }
        if cli.nan_equal {
            options.nan = NanPolicy::Equal;
        }
        tracing::debug!(?options, "comparison options resolved");
        Ok(options)
    }
}
