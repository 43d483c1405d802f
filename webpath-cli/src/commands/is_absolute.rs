//! Command to check whether a path is absolute.

use crate::error::CliError;
use crate::utils::{answer, load_location, GlobalOptions};
use clap::Args;
use webpath::path::is_absolute;

/// Print `true` and exit 0 for absolute paths, `false` and exit 1 otherwise.
#[derive(Args)]
pub struct IsAbsoluteCommand {
    /// Path to check
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl IsAbsoluteCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let location = load_location(global)?;
        answer(is_absolute(&self.path, &location), || {
            format!("{} is not absolute", self.path)
        })
    }
}
