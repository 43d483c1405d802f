//! Main entry point for the webpath CLI.
//!
//! Each subcommand runs one path operation and prints its result:
//! - `normalize`, `join`, `resolve`, `relative`: combine and clean paths
//! - `dirname`, `basename`, `extname`, `parse`: take paths apart
//! - `format`: build a path from parts
//! - `is-absolute`: answer through the exit status

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // Route library log records to stderr at the requested verbosity
    webpath::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        cwd: cli.cwd,
        origin: cli.origin,
        config: cli.config,
    };

    let result = match cli.command {
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Join(cmd) => cmd.execute(&global),
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::IsAbsolute(cmd) => cmd.execute(&global),
        cli::Command::Relative(cmd) => cmd.execute(&global),
        cli::Command::Dirname(cmd) => cmd.execute(&global),
        cli::Command::Basename(cmd) => cmd.execute(&global),
        cli::Command::Extname(cmd) => cmd.execute(&global),
        cli::Command::Parse(cmd) => cmd.execute(&global),
        cli::Command::Format(cmd) => cmd.execute(&global),
        cli::Command::Escape(cmd) => cmd.execute(&global),
        cli::Command::Segments(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !matches!(e, error::CliError::SemanticFailure(_)) || global.verbose {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
