//! Command to normalize a path.

use crate::error::CliError;
use crate::utils::{load_location, GlobalOptions};
use clap::Args;
use webpath::path::normalize;

/// Collapse `.`, `..` and repeated separators.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path to normalize
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let location = load_location(global)?;
        println!("{}", normalize(&self.path, &location));
        Ok(())
    }
}
