//! Host location configuration.
//!
//! The path functions take their current path and origin from a
//! [`Location`](crate::path::Location). This module builds one from layered
//! sources:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`WEBPATH_CWD`, `WEBPATH_ORIGIN`)
//! 3. An explicit file (via `ConfigBuilder::with_config_file`)
//! 4. Project config (`webpath.yaml`, nearest ancestor of the working dir)
//! 5. User config (`~/.webpath/config.yaml`)
//! 6. Built-in defaults (cwd `/`, no origin)
//!
//! # Examples
//!
//! ```no_run
//! use webpath::config::ConfigBuilder;
//! use webpath::path::resolve;
//!
//! let location = ConfigBuilder::new().build_location().unwrap();
//! println!("{}", resolve(&["index.html"], &location));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use schema::Config;
