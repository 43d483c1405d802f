//! Build script for webpath-cli.
//!
//! Generates a man page into OUT_DIR using clap_mangen.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is restated here.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Keep synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("webpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manipulate slash-delimited paths")
        .long_about(
            "Normalize, join, resolve, decompose and recompose POSIX-style paths \
             against a configurable current location and origin",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("cwd")
                .long("cwd")
                .help("Current path used to resolve relative paths")
                .value_name("PATH")
                .global(true),
        )
        .arg(
            Arg::new("origin")
                .long("origin")
                .help("Origin prefix that marks full URLs as absolute")
                .value_name("ORIGIN")
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read host location settings from this YAML file")
                .value_name("FILE")
                .global(true),
        )
        .subcommands(vec![
            Command::new("normalize").about("Collapse `.`, `..` and repeated separators"),
            Command::new("join").about("Join paths and normalize the result"),
            Command::new("resolve").about("Resolve paths into an absolute path"),
            Command::new("is-absolute").about("Exit successfully if a path is absolute"),
            Command::new("relative").about("Combine a base path with a target path"),
            Command::new("dirname").about("Print the directory portion of a path"),
            Command::new("basename").about("Print the last segment of a path"),
            Command::new("extname").about("Print the extension of a path"),
            Command::new("parse").about("Split a path into root, dir, base, ext and name"),
            Command::new("format").about("Build a path from its parts"),
            Command::new("escape").about("Percent-encode a path as a URI component"),
            Command::new("segments").about("Print the segments of a path, one per line"),
            Command::new("completions").about("Generate shell completion scripts"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("webpath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
