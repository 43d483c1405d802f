//! Command to print the last segment of a path.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use webpath::path::basename;

/// Print the last segment, optionally without a suffix.
#[derive(Args)]
pub struct BasenameCommand {
    /// Path to inspect
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Suffix to strip from the result
    #[arg(long, value_name = "EXT", allow_hyphen_values = true)]
    pub ext: Option<String>,
}

impl BasenameCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", basename(&self.path, self.ext.as_deref()));
        Ok(())
    }
}
