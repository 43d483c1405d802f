//! CLI command implementations.
//!
//! Each command wraps one library operation and prints its result:
//! - `normalize`, `join`, `resolve`, `relative`: combine and clean paths
//! - `is_absolute`: predicate with exit status
//! - `dirname`, `basename`, `extname`, `parse`: take a path apart
//! - `format`: build a path from parts
//! - `escape`: percent-encode a path
//! - `segments`: list path segments
//! - `completions`: shell completion scripts

pub mod basename;
pub mod completions;
pub mod dirname;
pub mod escape;
pub mod extname;
pub mod format;
pub mod is_absolute;
pub mod join;
pub mod normalize;
pub mod parse;
pub mod relative;
pub mod resolve;
pub mod segments;

pub use basename::BasenameCommand;
pub use completions::CompletionsCommand;
pub use dirname::DirnameCommand;
pub use escape::EscapeCommand;
pub use extname::ExtnameCommand;
pub use format::FormatCommand;
pub use is_absolute::IsAbsoluteCommand;
pub use join::JoinCommand;
pub use normalize::NormalizeCommand;
pub use parse::{ParseCommand, ParseOutput};
pub use relative::RelativeCommand;
pub use resolve::ResolveCommand;
pub use segments::SegmentsCommand;
