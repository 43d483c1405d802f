//! Rebuilding a path string from its parts.

use serde::{Deserialize, Serialize};

use crate::path::decompose::ParsedPath;

/// Anchors that a formatted path keeps when its `dir` starts with them,
/// checked in this order.
const ANCHORS: [&str; 4] = ["./", "../", "/", "."];

/// Input to [`format`]. Every field is optional.
///
/// # Examples
///
/// ```
/// use webpath::path::PathParts;
///
/// let parts = PathParts::new().dir("/a/b").name("c").ext(".txt");
/// assert_eq!(parts.dir.as_deref(), Some("/a/b"));
/// assert!(parts.base.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathParts {
    /// Used as the directory when `dir` is absent.
    pub root: Option<String>,
    /// Directory to place `base` in.
    pub dir: Option<String>,
    /// Final segment. Takes priority over `name` and `ext`.
    pub base: Option<String>,
    /// Final segment without its extension.
    pub name: Option<String>,
    /// Extension, including the leading dot.
    pub ext: Option<String>,
}

impl PathParts {
    /// Empty parts; formats to `""`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `root`.
    #[must_use]
    pub fn root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Set `dir`.
    #[must_use]
    pub fn dir(mut self, dir: impl Into<String>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    /// Set `base`.
    #[must_use]
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Set `name`.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set `ext`.
    #[must_use]
    pub fn ext(mut self, ext: impl Into<String>) -> Self {
        self.ext = Some(ext.into());
        self
    }
}

impl From<ParsedPath> for PathParts {
    fn from(parsed: ParsedPath) -> Self {
        Self {
            root: Some(parsed.root),
            dir: Some(parsed.dir),
            base: Some(parsed.base),
            name: Some(parsed.name),
            ext: Some(parsed.ext),
        }
    }
}

/// Treat empty strings the same as missing fields.
fn present(field: Option<&String>) -> Option<&str> {
    field.map(String::as_str).filter(|s| !s.is_empty())
}

/// Build a path string from its parts.
///
/// `dir` falls back to `root`, and `base` falls back to `name` + `ext`.
/// Without a directory the result is just the base.
///
/// # Examples
///
/// ```
/// use webpath::path::{format, PathParts};
///
/// let parts = PathParts::new().dir("/a/b").name("c").ext(".txt");
/// assert_eq!(format(&parts), "/a/b/c.txt");
///
/// let parts = PathParts::new().root("/").base("x");
/// assert_eq!(format(&parts), "/x");
///
/// assert_eq!(format(&PathParts::new().name("readme")), "readme");
/// ```
#[must_use]
pub fn format(parts: &PathParts) -> String {
    let dir = present(parts.dir.as_ref()).or_else(|| present(parts.root.as_ref()));
    let base = match present(parts.base.as_ref()) {
        Some(base) => base.to_string(),
        None => format!(
            "{}{}",
            parts.name.as_deref().unwrap_or(""),
            parts.ext.as_deref().unwrap_or("")
        ),
    };

    let Some(dir) = dir else {
        return base;
    };

    let joined = if dir.ends_with('/') {
        format!("{dir}{base}")
    } else {
        format!("{dir}/{base}")
    };

    for anchor in ANCHORS {
        if dir.starts_with(anchor) && !joined.starts_with(anchor) {
            return format!("{anchor}{joined}");
        }
    }
    joined
}
