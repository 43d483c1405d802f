#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # webpath
//!
//! POSIX-style path manipulation for hosts that have no filesystem, only a
//! current URL.
//!
//! Paths are plain strings delimited by `/` or `\`. They are normalized,
//! joined, resolved, taken apart and put back together without touching
//! any filesystem. The host's current path and origin are passed in as a
//! [`Location`].
//!
//! ## Core Types
//!
//! - [`WebPath`]: immutable path value with chainable operations
//! - [`Location`]: read-only host context for `resolve` and `is_absolute`
//! - [`ParsedPath`] and [`PathParts`]: decomposed path records
//! - [`Config`] and [`ConfigBuilder`]: layered host configuration
//! - [`Error`] and [`Result`]: error handling for configuration loading
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use webpath::{Location, WebPath};
//!
//! let loc = Location::new("/site/docs");
//!
//! let page = WebPath::new("guide/../api/index.html");
//! assert_eq!(page.normalize(&loc), "api/index.html");
//! assert_eq!(page.resolve::<&str>(&[], &loc), "/site/docs/api/index.html");
//! assert_eq!(page.extname(), ".html");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{Location, ParsedPath, PathParts, WebPath};
