//! Host location context.
//!
//! A browser-like host has no working directory; the closest equivalent is
//! the path component of its current URL, plus the URL origin. Both are
//! supplied by the caller as a [`Location`] and are only ever read.

use serde::{Deserialize, Deserializer, Serialize};

/// Read-only snapshot of the host's current location.
///
/// `cwd` anchors relative inputs to [`resolve`](crate::path::resolve).
/// `origin` lets full URLs such as `https://example.com/a` classify as
/// absolute in [`is_absolute`](crate::path::is_absolute).
///
/// # Examples
///
/// ```
/// use webpath::path::Location;
///
/// let loc = Location::new("/app/docs").with_origin("https://example.com");
/// assert_eq!(loc.cwd(), "/app/docs");
/// assert_eq!(loc.origin(), Some("https://example.com"));
///
/// let bare = Location::default();
/// assert_eq!(bare.cwd(), "/");
/// assert_eq!(bare.origin(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    cwd: String,
    #[serde(
        default,
        deserialize_with = "deserialize_origin",
        skip_serializing_if = "Option::is_none"
    )]
    origin: Option<String>,
}

/// An empty origin is never stored.
fn non_empty(origin: String) -> Option<String> {
    if origin.is_empty() {
        None
    } else {
        Some(origin)
    }
}

fn deserialize_origin<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.and_then(non_empty))
}

impl Location {
    /// Create a location rooted at `cwd` with no origin.
    #[must_use]
    pub fn new(cwd: impl Into<String>) -> Self {
        Self {
            cwd: cwd.into(),
            origin: None,
        }
    }

    /// Set the origin. An empty origin is the same as none.
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = non_empty(origin.into());
        self
    }

    /// The current path, used as the base for relative resolution.
    #[must_use]
    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// The origin prefix, if any.
    #[must_use]
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_origin_is_none() {
        let loc = Location::new("/").with_origin("");
        assert_eq!(loc.origin(), None);
    }

    #[test]
    fn test_origin_replaced() {
        let loc = Location::new("/")
            .with_origin("https://a.test")
            .with_origin("https://b.test");
        assert_eq!(loc.origin(), Some("https://b.test"));
    }

    #[test]
    fn test_deserialize_without_origin() {
        let loc: Location = serde_json::from_str(r#"{"cwd":"/x"}"#).unwrap();
        assert_eq!(loc, Location::new("/x"));
    }

    #[test]
    fn test_deserialized_empty_origin_reads_as_none() {
        let loc: Location = serde_json::from_str(r#"{"cwd":"/x","origin":""}"#).unwrap();
        assert_eq!(loc.origin(), None);
        assert_eq!(loc, Location::new("/x"));
    }

    #[test]
    fn test_deserialized_null_origin_reads_as_none() {
        let loc: Location = serde_json::from_str(r#"{"cwd":"/x","origin":null}"#).unwrap();
        assert_eq!(loc, Location::new("/x"));
    }

    #[test]
    fn test_empty_origin_not_serialized() {
        let loc: Location = serde_json::from_str(r#"{"cwd":"/x","origin":""}"#).unwrap();
        assert_eq!(serde_json::to_string(&loc).unwrap(), r#"{"cwd":"/x"}"#);
    }
}
