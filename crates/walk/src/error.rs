use std::io;
use std::path::{Path, PathBuf};

/// Traversal step that failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WalkErrorKind {
    /// The source root could not be inspected (missing, permission denied).
    Root,
    /// A directory could not be opened or its listing broke off midway.
    ListDirectory,
    /// An entry vanished or could not be inspected after it was listed.
    Entry,
    /// A relative root could not be joined onto the working directory.
    ResolveRelative,
}

impl WalkErrorKind {
    const fn action(self) -> &'static str {
        match self {
            Self::Root => "failed to inspect traversal root",
            Self::ListDirectory => "failed to list directory",
            Self::Entry => "failed to inspect",
            Self::ResolveRelative => "failed to resolve relative source",
        }
    }
}

/// Error that ends a walk: the failing step, the path involved, and the
/// I/O error behind it.
#[derive(Debug, thiserror::Error)]
#[error("{} '{}': {source}", .kind.action(), .path.display())]
pub struct WalkError {
    kind: WalkErrorKind,
    path: PathBuf,
    #[source]
    source: io::Error,
}

impl WalkError {
    pub(crate) fn new(kind: WalkErrorKind, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            kind,
            path: path.into(),
            source,
        }
    }

    /// Step that failed.
    #[must_use]
    pub const fn kind(&self) -> WalkErrorKind {
        self.kind
    }

    /// Path the failing step was working on.
    ///
    /// ```
    /// use walk::{WalkBuilder, WalkErrorKind};
    ///
    /// let error = WalkBuilder::new("./definitely_missing_root")
    ///     .build()
    ///     .err()
    ///     .expect("missing root");
    /// assert_eq!(error.kind(), WalkErrorKind::Root);
    /// assert!(error.path().ends_with("definitely_missing_root"));
    /// ```
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
