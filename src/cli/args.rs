//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap for the
//! read-only defaults inspection tool.

use crate::error::{OptionsError, Result};
use clap::Parser;
use std::str::FromStr;

/// Print the default option tables of the packaging CLI
#[derive(Parser, Debug)]
#[command(
    name = "pake-defaults",
    version,
    about = "Print the default option tables of the packaging CLI",
    long_about = "Prints the option record used when a user supplies no flags.

Usage:
  pake-defaults
  pake-defaults --format toml
  pake-defaults --field userAgent"
)]
pub struct Args {
    /// Output format: json or toml
    #[arg(short, long, value_name = "FORMAT", default_value = "json")]
    pub format: String,

    /// Print only this field (serialized name, e.g. `safeDomain`)
    #[arg(long, value_name = "NAME")]
    pub field: Option<String>,

    /// Print the maintainer preset instead of the base defaults
    #[cfg(feature = "dev")]
    #[arg(long)]
    pub dev: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<OutputFormat> {
        self.format.parse()
    }
}

/// Rendering format for printed records
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Pretty-printed TOML
    Toml,
}

impl FromStr for OutputFormat {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        OutputFormat::ALL
            .into_iter()
            .find(|f| f.as_str() == wanted)
            .ok_or_else(|| OptionsError::UnknownFormat {
                name: s.to_string(),
                valid: OutputFormat::ALL
                    .iter()
                    .map(OutputFormat::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

impl OutputFormat {
    /// All known formats in declaration order.
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Json, OutputFormat::Toml];

    /// Returns the command line name of the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Toml => "toml",
        }
    }

    /// Renders any serializable value in this format.
    pub fn render<T: serde::Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        Ok(match self {
            OutputFormat::Json => serde_json::to_string_pretty(value)?,
            OutputFormat::Toml => toml::to_string_pretty(value)?,
        })
    }

    /// Renders a single field value.
    ///
    /// TOML has no bare-value document form, so scalars are printed the way
    /// JSON prints them and only the surrounding key is dropped.
    pub fn render_value(&self, value: &serde_json::Value) -> Result<String> {
        match (self, value) {
            (OutputFormat::Toml, serde_json::Value::String(s)) => Ok(s.clone()),
            _ => Ok(serde_json::to_string(value)?),
        }
    }
}
