//! Library exports for webpath-cli.
//!
//! This module exports the CLI structure for use by the build script
//! and integration tooling.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
