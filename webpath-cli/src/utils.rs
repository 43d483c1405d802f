//! Utility functions for CLI operations.
//!
//! This module turns the global options into the host [`Location`] the
//! path commands run against.

use crate::error::CliError;
use std::path::PathBuf;
use webpath::{Config, ConfigBuilder, Location};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Current path override.
    pub cwd: Option<String>,

    /// Origin override.
    pub origin: Option<String>,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// Load the host location.
///
/// Sources are merged with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. `--config` file
/// 4. Discovered configuration files
/// 5. Built-in defaults (lowest priority)
pub fn load_location(global: &GlobalOptions) -> Result<Location, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(path) = &global.config {
        builder = builder.with_config_file(path);
    }

    builder = builder.with_config(Config {
        cwd: global.cwd.clone(),
        origin: global.origin.clone(),
    });

    builder.build_location().map_err(CliError::from)
}

/// Print a boolean answer and turn "no" into a semantic failure.
pub fn answer(yes: bool, reason: impl FnOnce() -> String) -> Result<(), CliError> {
    println!("{yes}");
    if yes {
        Ok(())
    } else {
        Err(CliError::SemanticFailure(reason()))
    }
}
