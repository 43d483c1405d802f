//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BasenameCommand, CompletionsCommand, DirnameCommand, EscapeCommand, ExtnameCommand,
    FormatCommand, IsAbsoluteCommand, JoinCommand, NormalizeCommand, ParseCommand,
    RelativeCommand, ResolveCommand, SegmentsCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line front end for POSIX-style path manipulation.
#[derive(Parser)]
#[command(name = "webpath")]
#[command(version, about = "Manipulate slash-delimited paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Current path used to resolve relative paths [default: $WEBPATH_CWD or /]
    #[arg(long, value_name = "PATH", global = true)]
    pub cwd: Option<String>,

    /// Origin prefix that marks full URLs as absolute [default: $WEBPATH_ORIGIN]
    #[arg(long, value_name = "ORIGIN", global = true)]
    pub origin: Option<String>,

    /// Read host location settings from this YAML file
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Collapse `.`, `..` and repeated separators
    Normalize(NormalizeCommand),

    /// Join paths and normalize the result
    Join(JoinCommand),

    /// Resolve paths into an absolute path
    Resolve(ResolveCommand),

    /// Exit successfully if a path is absolute
    IsAbsolute(IsAbsoluteCommand),

    /// Combine a base path with a target path
    Relative(RelativeCommand),

    /// Print the directory portion of a path
    Dirname(DirnameCommand),

    /// Print the last segment of a path
    Basename(BasenameCommand),

    /// Print the extension of a path
    Extname(ExtnameCommand),

    /// Split a path into root, dir, base, ext and name
    Parse(ParseCommand),

    /// Build a path from its parts
    Format(FormatCommand),

    /// Percent-encode a path as a URI component
    Escape(EscapeCommand),

    /// Print the segments of a path, one per line
    Segments(SegmentsCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
