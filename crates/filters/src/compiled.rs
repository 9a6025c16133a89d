use globset::{GlobBuilder, GlobMatcher};

use crate::{FilterError, IgnorePattern};

/// Where the basename-glob rule is applied.
#[derive(Clone, Debug)]
enum GlobScope {
    /// Pattern without `/`: match the last segment only.
    Basename,
    /// Pattern containing `/`: match any segment-aligned suffix of the path.
    Suffix,
    /// Pattern starting with `/`: match the whole root-relative path.
    Anchored,
}

/// Literal remainder of a pattern after stripping one `*` from each end.
#[derive(Clone, Debug)]
struct Fragment {
    text: String,
    aligned_start: bool,
    aligned_end: bool,
}

impl Fragment {
    fn from_pattern(pattern: &str) -> Self {
        let (rest, aligned_end) = match pattern.strip_suffix('*') {
            Some(rest) => (rest, false),
            None => (pattern, true),
        };
        let (text, aligned_start) = match rest.strip_prefix('*') {
            Some(text) => (text, false),
            None => (rest, true),
        };
        Self {
            text: text.to_owned(),
            aligned_start,
            aligned_end,
        }
    }

    fn matches(&self, path: &str) -> bool {
        if self.text.is_empty() {
            return false;
        }
        let bytes = path.as_bytes();
        occurrences(path, &self.text).any(|start| {
            let end = start + self.text.len();
            let start_ok = !self.aligned_start || start == 0 || bytes[start - 1] == b'/';
            let end_ok = !self.aligned_end || end == bytes.len() || bytes[end] == b'/';
            start_ok && end_ok
        })
    }
}

/// Yields every start offset of `needle` in `haystack`, overlapping ones included.
fn occurrences<'a>(haystack: &'a str, needle: &'a str) -> impl Iterator<Item = usize> + 'a {
    let mut from = 0;
    std::iter::from_fn(move || {
        let found = from + haystack.get(from..)?.find(needle)?;
        let step = haystack[found..].chars().next().map_or(1, char::len_utf8);
        from = found + step;
        Some(found)
    })
}

/// Replaces every run of unescaped `*` with a single `*`.
fn collapse_stars(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut escaped = false;
    let mut previous_star = false;
    for ch in pattern.chars() {
        if escaped {
            out.push(ch);
            escaped = false;
            previous_star = false;
            continue;
        }
        match ch {
            '\\' => {
                escaped = true;
                previous_star = false;
                out.push(ch);
            }
            '*' if previous_star => {}
            '*' => {
                previous_star = true;
                out.push(ch);
            }
            _ => {
                previous_star = false;
                out.push(ch);
            }
        }
    }
    out
}

/// A pattern compiled for both matching rules.
///
/// The glob rule only ever sees the file name (or a segment-aligned suffix
/// when the pattern contains `/`). The fragment rule sees the whole path, so
/// it also matches directory segments: `*.d` excludes `conf.d/app.conf`
/// even though `app.conf` does not end in `.d`. An extension pattern
/// therefore excludes matching file names and everything below a directory
/// whose name carries that extension.
#[derive(Clone, Debug)]
pub(crate) struct CompiledPattern {
    pattern: IgnorePattern,
    glob: GlobMatcher,
    scope: GlobScope,
    fragment: Fragment,
}

impl CompiledPattern {
    pub(crate) fn new(pattern: IgnorePattern) -> Result<Self, FilterError> {
        let text = pattern.as_str();
        let (glob_text, scope) = if let Some(anchored) = text.strip_prefix('/') {
            (anchored, GlobScope::Anchored)
        } else if text.contains('/') {
            (text, GlobScope::Suffix)
        } else {
            (text, GlobScope::Basename)
        };

        let glob = GlobBuilder::new(&collapse_stars(glob_text))
            .literal_separator(true)
            .backslash_escape(true)
            .build()
            .map_err(|error| FilterError::new(text.to_owned(), error))?
            .compile_matcher();

        Ok(Self {
            fragment: Fragment::from_pattern(text),
            glob,
            scope,
            pattern,
        })
    }

    pub(crate) const fn pattern(&self) -> &IgnorePattern {
        &self.pattern
    }

    /// `path` is root-relative (or absolute) and uses `/` separators.
    pub(crate) fn matches(&self, path: &str) -> bool {
        self.matches_glob(path) || self.fragment.matches(path)
    }

    fn matches_glob(&self, path: &str) -> bool {
        let trimmed = path.trim_end_matches('/');
        match self.scope {
            GlobScope::Basename => {
                let basename = trimmed.rsplit('/').next().unwrap_or(trimmed);
                !basename.is_empty() && self.glob.is_match(basename)
            }
            GlobScope::Anchored => self.glob.is_match(trimmed.trim_start_matches('/')),
            GlobScope::Suffix => {
                let relative = trimmed.trim_start_matches('/');
                std::iter::once(0)
                    .chain(relative.match_indices('/').map(|(index, _)| index + 1))
                    .any(|start| self.glob.is_match(&relative[start..]))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compiled(text: &str) -> CompiledPattern {
        CompiledPattern::new(IgnorePattern::new(text)).expect("pattern compiles")
    }

    #[test]
    fn fragment_strips_one_star_per_side() {
        let fragment = Fragment::from_pattern("*cache*");
        assert_eq!(fragment.text, "cache");
        assert!(!fragment.aligned_start);
        assert!(!fragment.aligned_end);

        let fragment = Fragment::from_pattern("**");
        assert_eq!(fragment.text, "");

        let fragment = Fragment::from_pattern("**/vendor");
        assert_eq!(fragment.text, "*/vendor");
        assert!(fragment.aligned_end);
    }

    #[test]
    fn fragment_requires_alignment_on_unstripped_sides() {
        let exact = Fragment::from_pattern("log");
        assert!(exact.matches("log"));
        assert!(exact.matches("a/log/b"));
        assert!(exact.matches("/var/log"));
        assert!(!exact.matches("a/logger.txt"));
        assert!(!exact.matches("catalog"));

        let prefix = Fragment::from_pattern("temp*");
        assert!(prefix.matches("a/temp-files/x"));
        assert!(!prefix.matches("a/mytemp/x"));

        let suffix = Fragment::from_pattern("*.log");
        assert!(suffix.matches("logs/app.log"));
        assert!(!suffix.matches("logs/app.log.gz"));
    }

    #[test]
    fn occurrences_include_overlaps() {
        let starts: Vec<_> = occurrences("aaa", "aa").collect();
        assert_eq!(starts, [0, 1]);

        let later = Fragment::from_pattern("ab");
        assert!(later.matches("xab/ab"));
    }

    #[test]
    fn occurrences_step_over_multibyte_characters() {
        let starts: Vec<_> = occurrences("éé", "é").collect();
        assert_eq!(starts, [0, 2]);
    }

    #[test]
    fn collapse_stars_keeps_escapes() {
        assert_eq!(collapse_stars("**"), "*");
        assert_eq!(collapse_stars("a***b"), "a*b");
        assert_eq!(collapse_stars("a\\**"), "a\\**");
    }

    #[test]
    fn double_star_is_a_plain_wildcard() {
        let pattern = compiled("a**b");
        assert!(pattern.matches("dir/axxb"));
        assert!(!pattern.matches("dir/a/b"));
    }

    #[test]
    fn suffix_scope_matches_nested_directories() {
        let pattern = compiled("docs/*.md");
        assert!(pattern.matches("docs/intro.md"));
        assert!(pattern.matches("site/docs/intro.md"));
        assert!(!pattern.matches("docs/guide/intro.md"));
        assert!(!pattern.matches("mydocs/intro.md"));
    }

    #[test]
    fn anchored_scope_matches_from_root_only() {
        let pattern = compiled("/config/*.yml");
        assert!(pattern.matches("config/app.yml"));
        assert!(!pattern.matches("nested/config/app.yml"));
    }

    #[test]
    fn extension_fragment_reaches_directory_segments() {
        let pattern = compiled("*.d");
        assert!(pattern.matches("conf.d/app.conf"));
        assert!(pattern.matches("etc/conf.d"));
        assert!(!pattern.matches("conf.dist/app.conf"));
        assert!(!pattern.matches("etc/app.conf"));
    }

    #[test]
    fn basename_glob_ignores_trailing_separator() {
        let pattern = compiled("build");
        assert!(pattern.matches("out/build/"));
    }
}
