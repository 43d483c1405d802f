//! Command to split a path into its parts.

use crate::error::CliError;
use crate::utils::{load_location, GlobalOptions};
use clap::{Args, ValueEnum};
use webpath::path::parse;
use webpath::ParsedPath;

/// Output encodings for structured results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ParseOutput {
    /// A single-line JSON object
    Json,
    /// A YAML mapping
    Yaml,
}

impl ParseOutput {
    /// Render a parsed path in this encoding.
    pub fn render(self, parsed: &ParsedPath) -> Result<String, CliError> {
        match self {
            ParseOutput::Json => serde_json::to_string(parsed)
                .map_err(|e| CliError::Library(webpath::Error::Json(e))),
            ParseOutput::Yaml => serde_yaml::to_string(parsed)
                .map(|s| s.trim_end().to_string())
                .map_err(|e| CliError::Library(webpath::Error::Yaml(e))),
        }
    }
}

/// Print root, dir, base, ext and name of a path.
#[derive(Args)]
pub struct ParseCommand {
    /// Path to parse
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Output encoding
    #[arg(long, value_enum, default_value = "json")]
    pub format: ParseOutput,
}

impl ParseCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let location = load_location(global)?;
        let parsed = parse(&self.path, &location);
        println!("{}", self.format.render(&parsed)?);
        Ok(())
    }
}
