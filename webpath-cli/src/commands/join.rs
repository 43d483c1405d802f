//! Command to join paths.

use crate::error::CliError;
use crate::utils::{load_location, GlobalOptions};
use clap::Args;
use webpath::path::join;

/// Join paths with `/` and normalize the result.
#[derive(Args)]
pub struct JoinCommand {
    /// Paths to join; none gives `.`
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub paths: Vec<String>,
}

impl JoinCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let location = load_location(global)?;
        println!("{}", join(&self.paths, &location));
        Ok(())
    }
}
