//! Absolute path detection.

use crate::path::location::Location;

/// Returns true if `path` is anchored.
///
/// A path is absolute when it starts with `/`, or when it starts with the
/// host origin (so full URLs count as absolute). Drive letters and UNC
/// prefixes are not recognized.
///
/// # Examples
///
/// ```
/// use webpath::path::{is_absolute, Location};
///
/// let loc = Location::default().with_origin("https://example.com");
/// assert!(is_absolute("/a/b", &loc));
/// assert!(is_absolute("https://example.com/a", &loc));
/// assert!(!is_absolute("a/b", &loc));
/// assert!(!is_absolute("\\a", &loc));
/// ```
#[must_use]
pub fn is_absolute(path: &str, location: &Location) -> bool {
    path.starts_with('/') || location.origin().is_some_and(|origin| path.starts_with(origin))
}
