use std::fmt;

/// A single ignore pattern as written in the pattern file (already trimmed).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct IgnorePattern(String);

impl IgnorePattern {
    /// Creates a pattern from `text`, trimming surrounding whitespace.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.len() == text.len() {
            Self(text)
        } else {
            Self(trimmed.to_owned())
        }
    }

    /// Returns the pattern text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Reports whether the pattern contains a wildcard character.
    #[must_use]
    pub fn has_wildcard(&self) -> bool {
        self.0.contains(['*', '?', '['])
    }
}

impl fmt::Display for IgnorePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for IgnorePattern {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IgnorePattern {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for IgnorePattern {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
