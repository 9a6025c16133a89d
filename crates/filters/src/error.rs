use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Error produced when a pattern cannot be compiled into a glob matcher.
///
/// The matcher keeps going without the pattern; the error is surfaced to the
/// operator as a warning.
#[derive(Clone, Debug)]
pub struct FilterError {
    pattern: String,
    source: globset::Error,
}

impl FilterError {
    pub(crate) fn new(pattern: String, source: globset::Error) -> Self {
        Self { pattern, source }
    }

    /// Returns the offending pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ignore pattern '{}' is not a valid glob: {}",
            self.pattern,
            self.source.kind()
        )
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Error returned when an ignore file exists but cannot be read, or when a
/// required ignore file is missing.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The operator named an ignore file that does not exist.
    #[error("ignore file '{}' does not exist", path.display())]
    Missing {
        /// Path that was requested.
        path: PathBuf,
    },
    /// Opening or reading the ignore file failed.
    #[error("failed to read ignore file '{}': {source}", path.display())]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// Returns the ignore file path tied to the failure.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Missing { path } | Self::Read { path, .. } => path,
        }
    }
}
