//! Command to print the directory portion of a path.

use crate::error::CliError;
use crate::utils::{load_location, GlobalOptions};
use clap::Args;
use webpath::path::dirname;

/// Print everything before the last segment.
#[derive(Args)]
pub struct DirnameCommand {
    /// Path to inspect
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl DirnameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let location = load_location(global)?;
        println!("{}", dirname(&self.path, &location));
        Ok(())
    }
}
