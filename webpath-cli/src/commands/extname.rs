//! Command to print the extension of a path.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use webpath::path::extname;

/// Print the extension of the last segment, including the dot.
#[derive(Args)]
pub struct ExtnameCommand {
    /// Path to inspect
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl ExtnameCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", extname(&self.path));
        Ok(())
    }
}
