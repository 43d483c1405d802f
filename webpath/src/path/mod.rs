//! POSIX-style path manipulation over plain strings.
//!
//! Every function here is a pure transformation of its string inputs. The
//! only outside state consulted is a read-only [`Location`] describing the
//! host's current path and origin, passed explicitly by the caller.
//!
//! # Layers
//!
//! - [`segment`]: splitting on `/` or `\`
//! - [`normalize()`]: collapsing `.` and `..`
//! - [`join`], [`resolve`], [`relative`]: combining paths
//! - [`is_absolute`]: anchoring by leading slash or host origin
//! - [`dirname`], [`basename`], [`extname`], [`parse`]: taking paths apart
//! - [`format()`]: putting them back together
//! - [`WebPath`]: an immutable value exposing all of the above as methods
//!
//! Output always uses `/` as its only separator.
//!
//! # Examples
//!
//! ```
//! use webpath::path::{self, Location};
//!
//! let loc = Location::new("/docs").with_origin("https://example.com");
//!
//! assert_eq!(path::join(&["a", "b", "..", "c"], &loc), "a/c");
//! assert_eq!(path::resolve(&["guide", "intro.md"], &loc), "/docs/guide/intro.md");
//! assert!(path::is_absolute("https://example.com/x", &loc));
//!
//! let parsed = path::parse("/a/b/c.txt", &loc);
//! assert_eq!(parsed.name, "c");
//! assert_eq!(path::format(&parsed.into()), "/a/b/c.txt");
//! ```

pub mod classify;
pub mod compose;
pub mod decompose;
pub mod escape;
pub mod format;
pub mod location;
pub mod normalize;
pub mod segment;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use classify::is_absolute;
pub use compose::{join, relative, resolve};
pub use decompose::{basename, dirname, extname, parse, ParsedPath};
pub use escape::escape;
pub use format::{format, PathParts};
pub use location::Location;
pub use normalize::normalize;
pub use segment::{segments, split, Segments};
pub use types::{WebPath, DELIMITER, SEP};
