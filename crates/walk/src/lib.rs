#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` enumerates the source tree that `escp` transfers. [`Walker`] yields
//! every entry depth-first with directory contents sorted by name, so the
//! resulting list is the same on every platform. [`collect_copy_targets`]
//! reduces that stream to what the copy stage needs: each non-directory entry
//! and each leaf empty directory, tagged with its path relative to the root.
//!
//! # Design
//!
//! - [`WalkBuilder`] configures the traversal (whether the root itself is
//!   yielded).
//! - [`Walker`] implements [`Iterator`] over [`WalkEntry`] values. A directory
//!   is read when the walker reaches it, which is how each directory entry
//!   learns its child count.
//! - [`CopyTarget`] pairs the on-disk path with the root-relative path and a
//!   [`TargetKind`].
//!
//! # Invariants
//!
//! - Relative paths never contain `..` segments and never escape the root.
//! - Symbolic links below the root are reported as entries and never
//!   followed. A root given as a link is resolved first.
//! - The first I/O failure ends the walk; nothing is silently skipped.
//!
//! # Errors
//!
//! [`WalkError`] carries a [`WalkErrorKind`] naming the failing step and the
//! offending path; [`std::error::Error::source`] exposes the [`std::io::Error`].
//!
//! # Examples
//!
//! ```
//! use walk::WalkBuilder;
//! use std::collections::BTreeSet;
//! use std::fs;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path().join("src");
//! let nested = root.join("nested");
//! fs::create_dir_all(&nested)?;
//! fs::write(root.join("file.txt"), b"data")?;
//! fs::write(nested.join("more.txt"), b"data")?;
//!
//! let walker = WalkBuilder::new(&root).include_root(false).build()?;
//! let mut seen = BTreeSet::new();
//! for entry in walker {
//!     seen.insert(entry?.relative_path().to_path_buf());
//! }
//!
//! assert!(seen.contains(std::path::Path::new("file.txt")));
//! assert!(seen.contains(std::path::Path::new("nested")));
//! assert!(seen.contains(std::path::Path::new("nested/more.txt")));
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod builder;
mod entry;
mod error;
mod targets;
mod walker;

pub use builder::WalkBuilder;
pub use entry::WalkEntry;
pub use error::{WalkError, WalkErrorKind};
pub use targets::{CopyTarget, TargetKind, collect_copy_targets};
pub use walker::Walker;
