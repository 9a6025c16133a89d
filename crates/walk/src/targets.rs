use std::path::{Path, PathBuf};

use logging::trace_flist;

use crate::{WalkBuilder, WalkEntry, WalkError};

/// What a [`CopyTarget`] refers to on disk.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TargetKind {
    /// A regular file, symlink, or other non-directory entry.
    File,
    /// A directory with no children, copied so the tree shape survives.
    EmptyDirectory,
}

/// A single item handed to the copy stage.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CopyTarget {
    full_path: PathBuf,
    relative_path: PathBuf,
    kind: TargetKind,
}

impl CopyTarget {
    /// Creates a target from its on-disk path and root-relative path.
    #[must_use]
    pub fn new(
        full_path: impl Into<PathBuf>,
        relative_path: impl Into<PathBuf>,
        kind: TargetKind,
    ) -> Self {
        Self {
            full_path: full_path.into(),
            relative_path: relative_path.into(),
            kind,
        }
    }

    /// Path used to read the item.
    #[must_use]
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    /// Path relative to the transfer root; the matcher sees this one.
    #[must_use]
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// Kind of item.
    #[must_use]
    pub const fn kind(&self) -> TargetKind {
        self.kind
    }

    fn from_entry(entry: WalkEntry) -> Option<Self> {
        let kind = if !entry.is_dir() {
            TargetKind::File
        } else if entry.is_empty_dir() && !entry.is_root() {
            TargetKind::EmptyDirectory
        } else {
            return None;
        };

        let relative_path = if entry.is_root() {
            PathBuf::from(entry.full_path.file_name()?)
        } else {
            entry.relative_path
        };

        Some(Self {
            full_path: entry.full_path,
            relative_path,
            kind,
        })
    }
}

impl AsRef<Path> for CopyTarget {
    fn as_ref(&self) -> &Path {
        &self.relative_path
    }
}

/// Collects every non-directory entry and every leaf empty directory below
/// `root`, in walk order.
///
/// Non-empty directories are never targets. When `root` is itself a
/// non-directory it is the single target, named by its file name.
///
/// # Errors
///
/// Returns the first [`WalkError`] encountered; no partial list is returned.
///
/// # Examples
///
/// ```
/// use std::fs;
/// use std::path::PathBuf;
/// use walk::collect_copy_targets;
///
/// # fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempfile::tempdir()?;
/// fs::create_dir(temp.path().join("emptydir"))?;
/// fs::create_dir(temp.path().join("nonemptydir"))?;
/// fs::write(temp.path().join("nonemptydir/file.txt"), b"x")?;
/// fs::write(temp.path().join("file1.txt"), b"x")?;
///
/// let targets = collect_copy_targets(temp.path())?;
/// let relative: Vec<PathBuf> = targets.iter().map(|t| t.relative_path().to_path_buf()).collect();
/// assert_eq!(
///     relative,
///     [PathBuf::from("emptydir"), PathBuf::from("file1.txt"), PathBuf::from("nonemptydir/file.txt")]
/// );
/// # Ok(())
/// # }
/// # demo().unwrap();
/// ```
pub fn collect_copy_targets(root: impl AsRef<Path>) -> Result<Vec<CopyTarget>, WalkError> {
    let walker = WalkBuilder::new(root.as_ref()).build()?;
    let mut targets = Vec::new();

    for entry in walker {
        if let Some(target) = CopyTarget::from_entry(entry?) {
            targets.push(target);
        }
    }

    trace_flist!(
        "collected {} copy targets under {}",
        targets.len(),
        root.as_ref().display()
    );
    Ok(targets)
}
