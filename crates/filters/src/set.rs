use std::path::{Component, Path};
use std::sync::Arc;

use logging::trace_filter;

use crate::{FilterError, IgnorePattern, compiled::CompiledPattern};

#[derive(Debug, Default)]
struct IgnoreSetInner {
    patterns: Vec<IgnorePattern>,
    compiled: Vec<CompiledPattern>,
    diagnostics: Vec<FilterError>,
}

/// Compiled, immutable collection of ignore patterns.
///
/// A path is excluded when any pattern matches it. Patterns that fail to
/// compile as globs are skipped and recorded in
/// [`diagnostics`](Self::diagnostics); construction itself never fails.
///
/// `IgnoreSet` is cheaply cloneable (the inner state is behind an [`Arc`]).
///
/// # Examples
///
/// ```
/// use filters::{IgnorePattern, IgnoreSet};
///
/// let set = IgnoreSet::new(["*.log", "*.bak"].map(IgnorePattern::from));
/// let kept = set.filter(["file1.txt", "file2.log", "file3.bak", "subdir/file4.txt"]);
/// assert_eq!(kept, ["file1.txt", "subdir/file4.txt"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct IgnoreSet {
    inner: Arc<IgnoreSetInner>,
}

impl IgnoreSet {
    /// Compiles `patterns` in order.
    pub fn new<I>(patterns: I) -> Self
    where
        I: IntoIterator<Item = IgnorePattern>,
    {
        let mut inner = IgnoreSetInner::default();

        for pattern in patterns {
            match CompiledPattern::new(pattern.clone()) {
                Ok(compiled) => inner.compiled.push(compiled),
                Err(error) => {
                    tracing::warn!(target: "escp::filter", "{error}; pattern skipped");
                    inner.diagnostics.push(error);
                }
            }
            inner.patterns.push(pattern);
        }

        trace_filter!(
            "compiled {} of {} ignore patterns",
            inner.compiled.len(),
            inner.patterns.len()
        );

        Self {
            inner: Arc::new(inner),
        }
    }

    /// Returns a set that excludes nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of patterns supplied, including ones that failed to compile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.patterns.len()
    }

    /// Reports whether no patterns were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.patterns.is_empty()
    }

    /// Patterns in their original order.
    #[must_use]
    pub fn patterns(&self) -> &[IgnorePattern] {
        &self.inner.patterns
    }

    /// Compile failures for patterns that were skipped.
    #[must_use]
    pub fn diagnostics(&self) -> &[FilterError] {
        &self.inner.diagnostics
    }

    /// Reports whether `path` is excluded by any pattern.
    #[must_use]
    pub fn is_excluded(&self, path: impl AsRef<Path>) -> bool {
        self.matching_pattern(path).is_some()
    }

    /// Returns the first pattern that excludes `path`.
    #[must_use]
    pub fn matching_pattern(&self, path: impl AsRef<Path>) -> Option<&IgnorePattern> {
        if self.inner.compiled.is_empty() {
            return None;
        }
        let text = path_text(path.as_ref());
        let matched = self
            .inner
            .compiled
            .iter()
            .find(|compiled| compiled.matches(&text))
            .map(CompiledPattern::pattern);

        if let Some(pattern) = matched {
            trace_filter!("excluding {} (pattern {})", text, pattern);
        }
        matched
    }

    /// Keeps the paths that are not excluded, preserving their order.
    pub fn filter<I, P>(&self, paths: I) -> Vec<P>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        paths
            .into_iter()
            .filter(|path| !self.is_excluded(path))
            .collect()
    }
}

/// Renders `path` with `/` separators, dropping `.` components.
fn path_text(path: &Path) -> String {
    let mut text = String::new();
    for component in path.components() {
        match component {
            Component::RootDir => text.push('/'),
            Component::CurDir => {}
            Component::Prefix(prefix) => text.push_str(&prefix.as_os_str().to_string_lossy()),
            Component::ParentDir | Component::Normal(_) => {
                if !text.is_empty() && !text.ends_with('/') {
                    text.push('/');
                }
                text.push_str(&component.as_os_str().to_string_lossy());
            }
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::path_text;
    use std::path::Path;

    #[test]
    fn path_text_drops_current_dir_components() {
        assert_eq!(path_text(Path::new("./src/./main.rs")), "src/main.rs");
        assert_eq!(path_text(Path::new("/srv/./data")), "/srv/data");
    }

    #[test]
    fn path_text_collapses_repeated_separators() {
        assert_eq!(path_text(Path::new("a//b/c/")), "a/b/c");
    }
}
