//! Extracting the structural parts of a path.

use serde::{Deserialize, Serialize};

use crate::path::classify::is_absolute;
use crate::path::location::Location;
use crate::path::segment::{is_all_separators, last_segment, segments};

/// The parts of a path as produced by [`parse`].
///
/// # Examples
///
/// ```
/// use webpath::path::{parse, Location, ParsedPath};
///
/// let parsed = parse("/a/b/c.txt", &Location::default());
/// assert_eq!(
///     parsed,
///     ParsedPath {
///         root: "/".into(),
///         dir: "/a/b".into(),
///         base: "c.txt".into(),
///         ext: ".txt".into(),
///         name: "c".into(),
///     }
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedPath {
    /// `/` for paths starting with a slash, otherwise empty.
    pub root: String,
    /// Everything before the last segment.
    pub dir: String,
    /// The last segment.
    pub base: String,
    /// The extension of `base`, including the leading dot.
    pub ext: String,
    /// `base` without `ext`.
    pub name: String,
}

/// The directory portion of a path.
///
/// Trailing separators are ignored. Relative paths with no directory give
/// `"."`; absolute ones give `"/"`.
///
/// # Examples
///
/// ```
/// use webpath::path::{dirname, Location};
///
/// let loc = Location::default();
/// assert_eq!(dirname("/a/b/c.txt", &loc), "/a/b");
/// assert_eq!(dirname("/a/b/", &loc), "/a");
/// assert_eq!(dirname("/a", &loc), "/");
/// assert_eq!(dirname("a", &loc), ".");
/// ```
#[must_use]
pub fn dirname(path: &str, location: &Location) -> String {
    let mut parts: Vec<&str> = segments(path, true).collect();
    while parts.last().is_some_and(|segment| segment.is_empty()) {
        parts.pop();
    }
    parts.pop();

    let mut result = parts.join("/");
    if is_absolute(path, location) {
        if !result.starts_with('/') {
            result.insert(0, '/');
        }
    } else if result.is_empty() {
        result.push('.');
    }
    result
}

/// The last segment of a path, optionally without a suffix.
///
/// `ext` is removed only when it is a strict suffix of the segment. A path
/// made only of separators has no segment: it yields `""`, or the path
/// itself when a non-empty `ext` is given.
///
/// # Examples
///
/// ```
/// use webpath::path::basename;
///
/// assert_eq!(basename("/a/b/c.txt", None), "c.txt");
/// assert_eq!(basename("/a/b/c.txt", Some(".txt")), "c");
/// assert_eq!(basename("/a/b/", None), "b");
/// assert_eq!(basename("///", None), "");
/// assert_eq!(basename("///", Some("///")), "///");
/// ```
#[must_use]
pub fn basename(path: &str, ext: Option<&str>) -> String {
    let ext = ext.filter(|ext| !ext.is_empty());

    if is_all_separators(path) {
        return match ext {
            Some(_) => path.to_string(),
            None => String::new(),
        };
    }

    let base = last_segment(path);
    match ext {
        Some(ext) if base.len() > ext.len() => {
            base.strip_suffix(ext).unwrap_or(base).to_string()
        }
        _ => base.to_string(),
    }
}

/// The extension of the last segment, including the dot.
///
/// Dotfiles such as `.gitignore` and names ending in a dot have no
/// extension.
///
/// # Examples
///
/// ```
/// use webpath::path::extname;
///
/// assert_eq!(extname("/a/b/c.txt"), ".txt");
/// assert_eq!(extname("a.b.c"), ".c");
/// assert_eq!(extname(".gitignore"), "");
/// assert_eq!(extname("a."), "");
/// ```
#[must_use]
pub fn extname(path: &str) -> String {
    let base = last_segment(path);
    match base.rfind('.') {
        Some(index) if index > 0 && index + 1 < base.len() => base[index..].to_string(),
        _ => String::new(),
    }
}

/// Split a path into its root, directory, base, extension and name.
#[must_use]
pub fn parse(path: &str, location: &Location) -> ParsedPath {
    let ext = extname(path);
    ParsedPath {
        root: if path.starts_with('/') {
            "/".to_string()
        } else {
            String::new()
        },
        dir: dirname(path, location),
        base: basename(path, None),
        name: basename(path, Some(&ext)),
        ext,
    }
}
