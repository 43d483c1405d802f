//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::Location;

/// Host location settings as read from a configuration source.
///
/// Every field is optional so sources can be layered; later sources
/// override earlier ones field by field.
///
/// # Examples
///
/// ```
/// use webpath::config::Config;
///
/// let config: Config = serde_yaml::from_str("cwd: /app\norigin: https://example.com\n").unwrap();
/// assert_eq!(config.cwd.as_deref(), Some("/app"));
/// assert_eq!(config.origin.as_deref(), Some("https://example.com"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Current path used to anchor relative resolution.
    pub cwd: Option<String>,

    /// Origin prefix that marks full URLs as absolute.
    pub origin: Option<String>,
}

impl Config {
    /// Overlay `other` on top of `self`; fields set in `other` win.
    pub fn merge(&mut self, other: Config) {
        if other.cwd.is_some() {
            self.cwd = other.cwd;
        }
        if other.origin.is_some() {
            self.origin = other.origin;
        }
    }

    /// Check field values.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `cwd` or `origin` is present but empty.
    pub fn validate(&self) -> Result<()> {
        if self.cwd.as_deref() == Some("") {
            return Err(Error::Validation {
                field: "cwd".into(),
                message: "must not be empty".into(),
            });
        }
        if self.origin.as_deref() == Some("") {
            return Err(Error::Validation {
                field: "origin".into(),
                message: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// The location described by this configuration.
    ///
    /// Missing fields fall back to [`Location::default`].
    #[must_use]
    pub fn to_location(&self) -> Location {
        let location = Location::new(self.cwd.clone().unwrap_or_else(|| "/".to_string()));
        match &self.origin {
            Some(origin) => location.with_origin(origin.clone()),
            None => location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overrides_set_fields() {
        let mut base = Config {
            cwd: Some("/a".into()),
            origin: Some("https://a.test".into()),
        };
        base.merge(Config {
            cwd: Some("/b".into()),
            origin: None,
        });
        assert_eq!(base.cwd.as_deref(), Some("/b"));
        assert_eq!(base.origin.as_deref(), Some("https://a.test"));
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        let config = Config {
            cwd: Some(String::new()),
            origin: None,
        };
        assert!(config.validate().is_err());

        let config = Config {
            cwd: None,
            origin: Some(String::new()),
        };
        assert!(config.validate().is_err());

        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_to_location_defaults() {
        assert_eq!(Config::default().to_location(), Location::default());
    }

    #[test]
    fn test_to_location_with_values() {
        let config = Config {
            cwd: Some("/site".into()),
            origin: Some("https://example.com".into()),
        };
        let loc = config.to_location();
        assert_eq!(loc.cwd(), "/site");
        assert_eq!(loc.origin(), Some("https://example.com"));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: std::result::Result<Config, _> = serde_yaml::from_str("cwd: /a\nport: 1\n");
        assert!(result.is_err());
    }
}
