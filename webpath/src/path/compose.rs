//! Joining and resolving sequences of paths.

use crate::path::classify::is_absolute;
use crate::path::location::Location;
use crate::path::normalize::normalize;
use crate::path::segment::segments;

/// Join paths with `/` and normalize the result.
///
/// Absoluteness is decided only by the concatenated string: an absolute
/// argument in the middle of the list does not reset the join.
///
/// # Examples
///
/// ```
/// use webpath::path::{join, Location};
///
/// let loc = Location::default();
/// assert_eq!(join::<&str>(&[], &loc), ".");
/// assert_eq!(join(&["a", "b", "..", "c"], &loc), "a/c");
/// assert_eq!(join(&["a", "/b"], &loc), "a/b");
/// ```
#[must_use]
pub fn join<S: AsRef<str>>(paths: &[S], location: &Location) -> String {
    match paths {
        [] => ".".to_string(),
        [only] => normalize(only.as_ref(), location),
        _ => {
            let joined = paths
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .join("/");
            normalize(&joined, location)
        }
    }
}

/// Resolve a sequence of paths into an absolute path.
///
/// The rightmost absolute argument becomes the base and everything to its
/// left is discarded. If no argument is absolute, the location's current
/// path is used as the base. The result always starts with a single `/`
/// and never climbs above the root.
///
/// # Examples
///
/// ```
/// use webpath::path::{resolve, Location};
///
/// let loc = Location::new("/app/docs");
/// assert_eq!(resolve(&["/a", "b", "/c", "d"], &loc), "/c/d");
/// assert_eq!(resolve(&["guide", "../api"], &loc), "/app/api");
/// assert_eq!(resolve::<&str>(&[], &loc), "/app/docs");
/// ```
#[must_use]
pub fn resolve<S: AsRef<str>>(paths: &[S], location: &Location) -> String {
    let base = paths
        .iter()
        .rposition(|path| is_absolute(path.as_ref(), location));

    let mut chain: Vec<&str> = Vec::with_capacity(paths.len() + 1);
    match base {
        Some(index) => {
            log::trace!("resolve: argument {index} is absolute, discarding {index} before it");
            chain.extend(paths[index..].iter().map(AsRef::as_ref));
        }
        None => {
            log::trace!("resolve: no absolute argument, anchoring at {}", location.cwd());
            chain.push(location.cwd());
            chain.extend(paths.iter().map(AsRef::as_ref));
        }
    }

    let joined = join(&chain, location);
    let remaining: Vec<&str> = segments(&joined, false)
        .skip_while(|segment| *segment == "." || *segment == "..")
        .collect();

    format!("/{}", remaining.join("/"))
}

/// Combine `from` and `to` into one path.
///
/// This joins the two paths; it does not compute the path leading from
/// `from` to `to`.
///
/// # Examples
///
/// ```
/// use webpath::path::{relative, Location};
///
/// let loc = Location::default();
/// assert_eq!(relative("/a/b", "c", &loc), "/a/b/c");
/// ```
#[must_use]
pub fn relative(from: &str, to: &str, location: &Location) -> String {
    join(&[from, to], location)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_empty_is_current() {
        assert_eq!(join::<&str>(&[], &Location::default()), ".");
    }

    #[test]
    fn test_join_single_normalizes() {
        let loc = Location::default();
        assert_eq!(join(&["a/./b/"], &loc), "a/b/");
        assert_eq!(join(&[""], &loc), ".");
    }

    #[test]
    fn test_join_many() {
        let loc = Location::default();
        assert_eq!(join(&["a", "b", "..", "c"], &loc), "a/c");
        assert_eq!(join(&["/a", "b/", "c"], &loc), "/a/b/c");
        assert_eq!(join(&["", ""], &loc), "/");
    }

    #[test]
    fn test_join_absolute_only_from_first() {
        let loc = Location::default();
        assert_eq!(join(&["a", "/b", "/c"], &loc), "a/b/c");
    }

    #[test]
    fn test_join_accepts_owned_strings() {
        let parts = vec!["x".to_string(), "y".to_string()];
        assert_eq!(join(&parts, &Location::default()), "x/y");
    }

    #[test]
    fn test_resolve_uses_rightmost_absolute() {
        let loc = Location::new("/cwd");
        assert_eq!(resolve(&["/a", "/b", "c"], &loc), "/b/c");
        assert_eq!(resolve(&["a", "/b"], &loc), "/b");
    }

    #[test]
    fn test_resolve_anchors_relative_at_cwd() {
        let loc = Location::new("/home/user");
        assert_eq!(resolve(&["docs", "./intro"], &loc), "/home/user/docs/intro");
        assert_eq!(resolve(&[".."], &loc), "/home");
    }

    #[test]
    fn test_resolve_drops_trailing_slash() {
        let loc = Location::new("/");
        assert_eq!(resolve(&["/a/b/"], &loc), "/a/b");
    }

    #[test]
    fn test_resolve_never_climbs_above_root() {
        let loc = Location::new("/");
        assert_eq!(resolve(&["../../.."], &loc), "/");
        assert_eq!(resolve(&["/a/../../b"], &loc), "/b");
    }

    #[test]
    fn test_resolve_with_relative_cwd_still_absolute() {
        let loc = Location::new("");
        assert_eq!(resolve(&["../a"], &loc), "/a");
        assert_eq!(resolve::<&str>(&[], &loc), "/");
    }

    #[test]
    fn test_resolve_origin_argument_is_base() {
        let loc = Location::new("/cwd").with_origin("https://example.com");
        assert_eq!(
            resolve(&["x", "https://example.com/y"], &loc),
            "/https:/example.com/y"
        );
    }

    #[test]
    fn test_relative_is_join() {
        let loc = Location::default();
        assert_eq!(relative("/a/b", "/a/c", &loc), "/a/b/a/c");
        assert_eq!(relative("a", "../b", &loc), "b");
    }
}
