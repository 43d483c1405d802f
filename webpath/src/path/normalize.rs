//! Path normalization.
//!
//! Normalization collapses `.` and `..` segments and redundant separators,
//! rewrites `\` to `/`, and keeps both the absoluteness of the input and a
//! trailing slash if one was given.

use crate::path::classify::is_absolute;
use crate::path::location::Location;
use crate::path::segment::segments;

const CURRENT: &str = ".";
const PARENT: &str = "..";

/// Normalize a path string.
///
/// Relative paths may climb above their starting point, so leading `..`
/// segments survive. Absolute paths cannot climb above the root, so any
/// `..` that would do so is dropped.
///
/// # Examples
///
/// ```
/// use webpath::path::{normalize, Location};
///
/// let loc = Location::default();
/// assert_eq!(normalize("", &loc), ".");
/// assert_eq!(normalize("a/./b/../c", &loc), "a/c");
/// assert_eq!(normalize("../../a", &loc), "../../a");
/// assert_eq!(normalize("/../a", &loc), "/a");
/// assert_eq!(normalize("a//b/../c/./", &loc), "a/c/");
/// ```
#[must_use]
pub fn normalize(path: &str, location: &Location) -> String {
    let explicit_directory = path.ends_with('/');
    let absolute = is_absolute(path, location);

    let mut stack = fold_segments(segments(path, false));

    if absolute {
        let climbing = stack
            .iter()
            .take_while(|segment| **segment == CURRENT || **segment == PARENT)
            .count();
        stack.drain(..climbing);
        if stack.is_empty() {
            return "/".to_string();
        }
    }

    let mut result = stack.join("/");
    if result.is_empty() {
        result.push_str(CURRENT);
    }
    if explicit_directory {
        result.push('/');
    }
    if absolute && !result.starts_with('/') {
        result.insert(0, '/');
    }
    result
}

/// Fold segments left to right, cancelling each `..` against the segment
/// before it where possible.
fn fold_segments<'a>(input: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut stack: Vec<&str> = Vec::new();

    for segment in input {
        match segment {
            CURRENT => {}
            PARENT => match stack.last().copied() {
                Some(PARENT) | None => stack.push(PARENT),
                Some(CURRENT) => {
                    stack.pop();
                    stack.push(PARENT);
                }
                Some(_) => {
                    stack.pop();
                }
            },
            other => stack.push(other),
        }
    }

    stack
}
