//! Command to resolve paths into an absolute path.

use crate::error::CliError;
use crate::utils::{load_location, GlobalOptions};
use clap::Args;
use webpath::path::resolve;

/// Resolve paths against the current location.
#[derive(Args)]
pub struct ResolveCommand {
    /// Paths to resolve, left to right
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub paths: Vec<String>,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let location = load_location(global)?;
        println!("{}", resolve(&self.paths, &location));
        Ok(())
    }
}
