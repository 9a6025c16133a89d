//! Glob-rule behaviour of ignore patterns: wildcards, classes, escapes, and
//! patterns that contain `/`.

use filters::{IgnorePattern, IgnoreSet};

fn set(patterns: &[&str]) -> IgnoreSet {
    IgnoreSet::new(patterns.iter().copied().map(IgnorePattern::from))
}

#[test]
fn star_does_not_cross_separators() {
    let set = set(&["a*z"]);
    assert!(set.is_excluded("dir/abcz"));
    assert!(!set.is_excluded("a/z"));
}

#[test]
fn character_ranges() {
    let set = set(&["report-[0-9].pdf"]);
    assert!(set.is_excluded("out/report-7.pdf"));
    assert!(!set.is_excluded("out/report-x.pdf"));
}

#[test]
fn negated_character_class() {
    let set = set(&["[!a]*.cfg"]);
    assert!(set.is_excluded("b.cfg"));
    assert!(!set.is_excluded("a.cfg"));
}

#[test]
fn multi_segment_pattern_matches_any_aligned_suffix() {
    let set = set(&["docs/*.md"]);
    assert!(set.is_excluded("docs/intro.md"));
    assert!(set.is_excluded("site/docs/intro.md"));
    assert!(!set.is_excluded("docs/guide/intro.md"));
    assert!(!set.is_excluded("mydocs/intro.md"));
}

#[test]
fn leading_slash_anchors_to_root() {
    let set = set(&["/config/*.yml"]);
    assert!(set.is_excluded("config/app.yml"));
    assert!(!set.is_excluded("nested/config/app.yml"));
}

#[test]
fn directory_path_pattern_excludes_its_contents() {
    let set = set(&["vendor/cache"]);
    assert!(set.is_excluded("vendor/cache"));
    assert!(set.is_excluded("vendor/cache/blob.bin"));
    assert!(set.is_excluded("app/vendor/cache/blob.bin"));
    assert!(!set.is_excluded("vendor/caches/blob.bin"));
}

#[test]
fn wildcard_on_both_sides_matches_inside_segments() {
    let set = set(&["*cache*"]);
    assert!(set.is_excluded("build/precached/item"));
    assert!(set.is_excluded("cache"));
    assert!(!set.is_excluded("build/cach/item"));
}

#[test]
fn invalid_glob_reports_diagnostic_without_panicking() {
    let set = set(&["{a,b"]);
    assert_eq!(set.diagnostics().len(), 1);
    let message = set.diagnostics()[0].to_string();
    assert!(message.contains("{a,b"), "unexpected message: {message}");
    assert!(!set.is_excluded("a"));
}
