//! Environment variable overrides.
//!
//! `WEBPATH_CWD` and `WEBPATH_ORIGIN` override file-based configuration.

use std::env;

use crate::config::schema::Config;

/// Environment variable holding the current path.
pub const CWD_ENV: &str = "WEBPATH_CWD";

/// Environment variable holding the origin.
pub const ORIGIN_ENV: &str = "WEBPATH_ORIGIN";

/// Reads `WEBPATH_*` variables into a configuration.
///
/// # Examples
///
/// ```no_run
/// use webpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config);
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment overrides to `config`.
    ///
    /// Unset variables leave the corresponding field untouched. A variable
    /// set to the empty string is kept, so validation can reject it.
    pub fn apply_overrides(config: &mut Config) {
        if let Ok(cwd) = env::var(CWD_ENV) {
            log::debug!("{CWD_ENV} overrides cwd with {cwd:?}");
            config.cwd = Some(cwd);
        }

        if let Ok(origin) = env::var(ORIGIN_ENV) {
            log::debug!("{ORIGIN_ENV} overrides origin with {origin:?}");
            config.origin = Some(origin);
        }
    }

    /// A configuration holding only environment-supplied fields.
    #[must_use]
    pub fn load() -> Config {
        let mut config = Config::default();
        Self::apply_overrides(&mut config);
        config
    }
}
