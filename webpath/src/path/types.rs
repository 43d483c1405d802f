//! The [`WebPath`] value type.
//!
//! `WebPath` wraps one path string and exposes the free functions of this
//! module as methods. It is immutable: every operation returns a new value.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::path::decompose::{self, ParsedPath};
use crate::path::format::{self, PathParts};
use crate::path::location::Location;
use crate::path::segment::{self, Segments};
use crate::path::{classify, compose, escape, normalize};

/// The separator used in every produced path.
pub const SEP: &str = "/";

/// The delimiter between entries of a path list.
pub const DELIMITER: &str = ":";

/// An immutable path string.
///
/// Two values are equal, and order, exactly as their strings do.
///
/// # Examples
///
/// ```
/// use webpath::path::{Location, WebPath};
///
/// let loc = Location::new("/site");
/// let path = WebPath::new("docs/./guide/../api/");
///
/// assert_eq!(path.normalize(&loc).as_str(), "docs/api/");
/// assert_eq!(path.resolve(&["intro.md"], &loc).as_str(), "/site/docs/api/intro.md");
/// assert_eq!(path.segments().collect::<Vec<_>>(), ["docs", ".", "guide", "..", "api"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WebPath {
    value: String,
}

impl WebPath {
    /// The separator used in every produced path.
    pub const SEP: &'static str = SEP;

    /// The delimiter between entries of a path list.
    pub const DELIMITER: &'static str = DELIMITER;

    /// Wrap a path string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Build a path from its parts with [`format`](crate::path::format()).
    ///
    /// # Examples
    ///
    /// ```
    /// use webpath::path::{PathParts, WebPath};
    ///
    /// let path = WebPath::from_parts(&PathParts::new().dir("/a").base("b.txt"));
    /// assert_eq!(path, "/a/b.txt");
    /// ```
    #[must_use]
    pub fn from_parts(parts: &PathParts) -> Self {
        Self::new(format::format(parts))
    }

    /// A new value holding the same string.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// The underlying string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consume the value, returning the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.value
    }

    /// The form this value serializes to: its string.
    #[must_use]
    pub fn to_serializable(&self) -> &str {
        &self.value
    }

    /// Lazily iterate over segments, skipping empty ones.
    ///
    /// Each call splits the stored string again.
    #[must_use]
    pub fn segments(&self) -> Segments<'_> {
        segment::segments(&self.value, false)
    }

    /// Owned copies of every non-empty segment.
    #[must_use]
    pub fn to_segments(&self) -> Vec<String> {
        self.segments().map(str::to_string).collect()
    }

    /// See [`normalize`](crate::path::normalize()).
    #[must_use]
    pub fn normalize(&self, location: &Location) -> Self {
        Self::new(normalize::normalize(&self.value, location))
    }

    /// Join `others` after this path. See [`join`](crate::path::join).
    #[must_use]
    pub fn join<S: AsRef<str>>(&self, others: &[S], location: &Location) -> Self {
        Self::new(compose::join(&self.chain(others), location))
    }

    /// Resolve `others` against this path. See [`resolve`](crate::path::resolve).
    #[must_use]
    pub fn resolve<S: AsRef<str>>(&self, others: &[S], location: &Location) -> Self {
        Self::new(compose::resolve(&self.chain(others), location))
    }

    /// See [`relative`](crate::path::relative).
    #[must_use]
    pub fn relative(&self, to: &str, location: &Location) -> Self {
        Self::new(compose::relative(&self.value, to, location))
    }

    /// See [`is_absolute`](crate::path::is_absolute).
    #[must_use]
    pub fn is_absolute(&self, location: &Location) -> bool {
        classify::is_absolute(&self.value, location)
    }

    /// See [`dirname`](crate::path::dirname).
    #[must_use]
    pub fn dirname(&self, location: &Location) -> Self {
        Self::new(decompose::dirname(&self.value, location))
    }

    /// See [`basename`](crate::path::basename).
    #[must_use]
    pub fn basename(&self, ext: Option<&str>) -> String {
        decompose::basename(&self.value, ext)
    }

    /// See [`extname`](crate::path::extname).
    #[must_use]
    pub fn extname(&self) -> String {
        decompose::extname(&self.value)
    }

    /// See [`parse`](crate::path::parse).
    #[must_use]
    pub fn parse(&self, location: &Location) -> ParsedPath {
        decompose::parse(&self.value, location)
    }

    /// The host has no namespaced path form, so this is the path itself.
    #[must_use]
    pub fn to_namespaced_path(&self) -> Self {
        self.clone()
    }

    /// Percent-encode the path as a URI component.
    ///
    /// # Examples
    ///
    /// ```
    /// use webpath::path::WebPath;
    ///
    /// assert_eq!(WebPath::new("/a b").escape(), "%2Fa%20b");
    /// ```
    #[must_use]
    pub fn escape(&self) -> Self {
        Self::new(escape::escape(&self.value))
    }

    fn chain<'a, S: AsRef<str>>(&'a self, others: &'a [S]) -> Vec<&'a str> {
        std::iter::once(self.as_str())
            .chain(others.iter().map(AsRef::as_ref))
            .collect()
    }
}

impl fmt::Display for WebPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for WebPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for WebPath {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for WebPath {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<WebPath> for String {
    fn from(path: WebPath) -> Self {
        path.value
    }
}

impl AsRef<str> for WebPath {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl PartialEq<str> for WebPath {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for WebPath {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl<'a> IntoIterator for &'a WebPath {
    type Item = &'a str;
    type IntoIter = Segments<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments()
    }
}
