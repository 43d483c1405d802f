//! Splitting path strings into segments.
//!
//! Both `/` and `\` act as separators. A segment is any run of characters
//! between two separators (or the ends of the string).

use std::iter::FusedIterator;
use std::str::Split;

/// Characters recognized as path separators on input.
pub const SEPARATORS: [char; 2] = ['/', '\\'];

/// Returns true if `c` separates path segments.
///
/// # Examples
///
/// ```
/// use webpath::path::segment::is_separator;
///
/// assert!(is_separator('/'));
/// assert!(is_separator('\\'));
/// assert!(!is_separator(':'));
/// ```
#[must_use]
pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Returns true if `path` is empty or made only of separators.
#[must_use]
pub fn is_all_separators(path: &str) -> bool {
    path.chars().all(is_separator)
}

/// Lazy iterator over the segments of a path string.
///
/// Created by [`segments`]. When empty segments are retained, every
/// separator is a boundary, so `"a//b"` yields `"a"`, `""`, `"b"` and a
/// leading or trailing separator yields an empty first or last segment.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    inner: Split<'a, fn(char) -> bool>,
    keep_empty: bool,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.keep_empty {
            return self.inner.next();
        }
        self.inner.by_ref().find(|segment| !segment.is_empty())
    }
}

impl<'a> DoubleEndedIterator for Segments<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.keep_empty {
            return self.inner.next_back();
        }
        while let Some(segment) = self.inner.next_back() {
            if !segment.is_empty() {
                return Some(segment);
            }
        }
        None
    }
}

impl FusedIterator for Segments<'_> {}

/// Iterate over the segments of `path`.
///
/// # Examples
///
/// ```
/// use webpath::path::segment::segments;
///
/// let parts: Vec<_> = segments("/a\\b//c/", false).collect();
/// assert_eq!(parts, ["a", "b", "c"]);
///
/// let parts: Vec<_> = segments("/a//b", true).collect();
/// assert_eq!(parts, ["", "a", "", "b"]);
/// ```
#[must_use]
pub fn segments(path: &str, keep_empty: bool) -> Segments<'_> {
    Segments {
        inner: path.split(is_separator as fn(char) -> bool),
        keep_empty,
    }
}

/// Split `path` into an owned list of segment slices.
///
/// Equivalent to collecting [`segments`].
#[must_use]
pub fn split(path: &str, keep_empty: bool) -> Vec<&str> {
    segments(path, keep_empty).collect()
}

/// The last non-empty segment of `path`, or `""` if there is none.
#[must_use]
pub fn last_segment(path: &str) -> &str {
    segments(path, false).next_back().unwrap_or("")
}
