//! Command to list the segments of a path.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use webpath::path::segments;

/// Print each segment on its own line.
#[derive(Args)]
pub struct SegmentsCommand {
    /// Path to split
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Print empty segments between adjacent separators too
    #[arg(long)]
    pub keep_empty: bool,
}

impl SegmentsCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        for segment in segments(&self.path, self.keep_empty) {
            println!("{segment}");
        }
        Ok(())
    }
}
