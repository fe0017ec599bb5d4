//! Integration tests for directory-prefix matching.
//!
//! A pattern that does not match a path directly is also compared with the
//! leading segments of the path's parent directory, so naming a directory
//! covers everything nested under it.

use filters::{Candidate, Pattern, PatternSet, matches};

fn pattern(raw: &str) -> Pattern {
    Pattern::parse(raw).unwrap().unwrap()
}

#[test]
fn directory_name_covers_all_descendants() {
    let set = PatternSet::new(["docs"]).unwrap();

    for path in [
        "docs",
        "docs/README.md",
        "docs/guide/install.md",
        "docs/a/b/c/d/e.txt",
    ] {
        assert!(set.matches(path).unwrap(), "{path}");
    }

    for path in ["doc", "docs.md", "src/docs", "documentation/x"] {
        assert!(!set.matches(path).unwrap(), "{path}");
    }
}

#[test]
fn more_specific_later_rule_wins_inside_directory() {
    assert!(!matches("docs/README.md", ["docs", "!docs/README.md"]).unwrap());
    assert!(matches("docs/CHANGELOG.md", ["docs", "!docs/README.md"]).unwrap());
}

#[test]
fn nested_directory_pattern_matches_deeper_paths() {
    let set = PatternSet::new(["vendor/cache"]).unwrap();

    assert!(set.matches("vendor/cache/blob").unwrap());
    assert!(set.matches("vendor/cache/x/y").unwrap());
    assert!(!set.matches("vendor/other/blob").unwrap());
}

#[test]
fn wildcard_segments_match_parent_prefix() {
    let set = PatternSet::new(["target/*"]).unwrap();

    assert!(set.matches("target/debug").unwrap());
    assert!(set.matches("target/debug/build/out.o").unwrap());
    assert!(!set.matches("target").unwrap());
}

#[test]
fn top_level_star_matches_nested_paths_through_parent() {
    // `*` cannot cross `/` directly, but it matches the first parent segment.
    assert!(matches("docs/README.md", ["*"]).unwrap());
    assert!(!matches("docs/README.md", ["*.md"]).unwrap());
}

#[test]
fn prefix_match_compares_parent_not_full_path() {
    // Two segments on each side: the parent `a` has only one segment, so the
    // prefix branch is skipped and only the direct match counts.
    let p = pattern("a/*.txt");
    assert!(!p.matches(&Candidate::new("a/b.md")).unwrap());
    assert!(p.matches(&Candidate::new("a/b.txt")).unwrap());

    // The pattern's final segment is compared against a directory name.
    let p = pattern("a/b.txt");
    assert!(p.matches(&Candidate::new("a/b.txt/inner")).unwrap());
}

#[test]
fn absolute_candidates_use_leading_empty_segment() {
    let set = PatternSet::new(["/srv"]).unwrap();

    assert!(set.matches("/srv/www/index.html").unwrap());
    assert!(!set.matches("/var/srv/x").unwrap());
}
