//! Error types for the webpath library.
//!
//! The path algorithms themselves are total: every input string maps to a
//! defined output. Errors only arise in the layers around them, such as
//! loading a host configuration from disk or the environment.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a webpath error.
///
/// # Examples
///
/// ```
/// use webpath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/a/b".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the webpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration file could not be read.
    #[error("cannot read configuration file {}: {reason}", path.display())]
    ConfigFile {
        /// The file that failed to load.
        path: PathBuf,
        /// The reason the file could not be read.
        reason: String,
    },

    /// A configuration file is not valid YAML for the config schema.
    #[error("invalid configuration file {}: {source}", path.display())]
    Configuration {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },

    /// A YAML (de)serialization error outside configuration loading.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON (de)serialization error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The user's home directory could not be determined.
    #[error("cannot determine home directory")]
    NoHomeDirectory,
}

impl Error {
    /// Returns true if this error came from user-supplied configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use webpath::Error;
    ///
    /// let err = Error::Validation {
    ///     field: "cwd".into(),
    ///     message: "must not be empty".into(),
    /// };
    /// assert!(err.is_configuration());
    /// ```
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::ConfigFile { .. } | Self::Configuration { .. } | Self::Validation { .. }
        )
    }
}
