//! Command to percent-encode a path.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use webpath::WebPath;

/// Percent-encode a path as a single URI component.
#[derive(Args)]
pub struct EscapeCommand {
    /// Path to encode
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl EscapeCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", WebPath::new(self.path).escape());
        Ok(())
    }
}
