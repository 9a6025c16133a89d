#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `filters` decides which paths `escp` leaves out of a transfer. Patterns are
//! read from a `.scpignore`-style file (one pattern per line, blank lines and
//! `#` comments skipped) and compiled into an [`IgnoreSet`]. A path is excluded
//! as soon as any pattern matches it; there is no negation and no ordering
//! beyond "first match wins".
//!
//! # Design
//!
//! Every [`IgnorePattern`] is checked two ways:
//!
//! 1. **Basename glob.** The pattern is compiled with [`globset`] (`*` never
//!    crosses `/`) and matched against the last path segment. Runs of `*`
//!    collapse to one, so `**` is an ordinary wildcard. A pattern containing
//!    `/` is matched against every segment-aligned suffix of the path instead;
//!    a leading `/` pins it to the transfer root.
//! 2. **Segment fragment.** One trailing and one leading `*` are stripped and
//!    the remaining literal must appear in the path aligned to `/` boundaries.
//!    A side that lost a `*` does not need to be aligned. `node_modules`
//!    therefore excludes every path under a `node_modules` directory, while
//!    `log` leaves `logger.txt` alone.
//!
//! Paths are matched relative to the transfer root with `/` as the separator.
//!
//! # Invariants
//!
//! - Blank and `#` lines never become patterns; other lines are trimmed and
//!   kept in order, duplicates included.
//! - An empty set excludes nothing.
//! - A malformed glob never panics: the pattern matches nothing and the
//!   compile error is kept in [`IgnoreSet::diagnostics`].
//!
//! # Errors
//!
//! [`load_patterns`] treats a missing file as an empty list and reports every
//! other read failure as [`LoadError`]. [`FilterError`] describes a pattern
//! that failed to compile.
//!
//! # Examples
//!
//! ```
//! use filters::{IgnoreSet, parse_patterns};
//!
//! let patterns = parse_patterns("# build output\ntarget\n\n*.log\n");
//! let set = IgnoreSet::new(patterns);
//!
//! assert!(set.is_excluded("target/debug/escp"));
//! assert!(set.is_excluded("logs/today.log"));
//! assert!(!set.is_excluded("src/targeting.rs"));
//! ```

mod compiled;
mod error;
mod load;
mod pattern;
mod set;

pub use error::{FilterError, LoadError};
pub use load::{
    DEFAULT_IGNORE_FILE, load_patterns, load_patterns_required, parse_patterns, read_patterns,
};
pub use pattern::IgnorePattern;
pub use set::IgnoreSet;
