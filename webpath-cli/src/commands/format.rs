//! Command to build a path from its parts.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use webpath::{PathParts, WebPath};

/// Build a path from root, dir, base, name and ext.
#[derive(Args)]
pub struct FormatCommand {
    /// Root, used when --dir is absent
    #[arg(long, value_name = "ROOT")]
    pub root: Option<String>,

    /// Directory
    #[arg(long, value_name = "DIR")]
    pub dir: Option<String>,

    /// Final segment; wins over --name and --ext
    #[arg(long, value_name = "BASE")]
    pub base: Option<String>,

    /// Final segment without extension
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Extension including the dot
    #[arg(long, value_name = "EXT", allow_hyphen_values = true)]
    pub ext: Option<String>,

    /// Read all parts from a JSON object such as the output of `parse`
    #[arg(long, value_name = "JSON", conflicts_with_all = ["root", "dir", "base", "name", "ext"])]
    pub json: Option<String>,
}

impl FormatCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let parts = self.parts()?;
        println!("{}", WebPath::from_parts(&parts));
        Ok(())
    }

    fn parts(self) -> Result<PathParts, CliError> {
        if let Some(json) = self.json {
            return serde_json::from_str(&json)
                .map_err(|e| CliError::InvalidArguments(format!("invalid --json: {e}")));
        }
        Ok(PathParts {
            root: self.root,
            dir: self.dir,
            base: self.base,
            name: self.name,
            ext: self.ext,
        })
    }
}
