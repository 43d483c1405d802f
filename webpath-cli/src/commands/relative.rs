//! Command to combine a base path with a target.

use crate::error::CliError;
use crate::utils::{load_location, GlobalOptions};
use clap::Args;
use webpath::path::relative;

/// Combine FROM and TO into one normalized path.
#[derive(Args)]
pub struct RelativeCommand {
    /// Base path
    #[arg(value_name = "FROM", allow_hyphen_values = true)]
    pub from: String,

    /// Target path
    #[arg(value_name = "TO", allow_hyphen_values = true)]
    pub to: String,
}

impl RelativeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let location = load_location(global)?;
        println!("{}", relative(&self.from, &self.to, &location));
        Ok(())
    }
}
