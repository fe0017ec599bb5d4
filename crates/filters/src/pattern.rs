use std::fmt;
use std::sync::OnceLock;

use globset::{GlobBuilder, GlobMatcher};

use crate::FilterError;
use crate::clean::{clean, parent};

/// Leading marker that turns a pattern into an exclusion of earlier matches.
pub(crate) const NEGATION_MARKER: char = '!';

/// A single normalized pattern.
///
/// The pattern keeps its cleaned text (including the `!` marker when negated),
/// the `/`-separated segments of its body, and a lazily compiled glob matcher.
/// Compilation happens on first use so a malformed glob is reported by the
/// evaluation that reaches it rather than by normalization. The outcome is
/// cached, which makes repeated evaluations report the same error.
#[derive(Clone)]
pub struct Pattern {
    text: String,
    negated: bool,
    segments: Vec<String>,
    matcher: OnceLock<Result<GlobMatcher, globset::Error>>,
}

impl Pattern {
    /// Normalizes one raw pattern.
    ///
    /// Returns `Ok(None)` when the pattern is blank after trimming.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidPattern`] when the trimmed pattern is the
    /// bare negation marker `!`.
    ///
    /// # Examples
    ///
    /// ```
    /// use filters::Pattern;
    ///
    /// let pattern = Pattern::parse("  !docs/./README.md ").unwrap().unwrap();
    /// assert_eq!(pattern.as_str(), "!docs/README.md");
    /// assert_eq!(pattern.body(), "docs/README.md");
    /// assert!(pattern.is_negated());
    /// assert_eq!(pattern.segments(), ["docs", "README.md"]);
    ///
    /// assert!(Pattern::parse("   ").unwrap().is_none());
    /// assert!(Pattern::parse("!").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Option<Self>, FilterError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let (negated, body) = match trimmed.strip_prefix(NEGATION_MARKER) {
            Some("") => return Err(FilterError::InvalidPattern),
            Some(rest) => (true, clean(rest)),
            None => (false, clean(trimmed)),
        };

        let segments = body.split('/').map(str::to_owned).collect();
        let text = if negated {
            format!("{NEGATION_MARKER}{body}")
        } else {
            body
        };

        Ok(Some(Self {
            text,
            negated,
            segments,
            matcher: OnceLock::new(),
        }))
    }

    /// Returns the cleaned pattern text, including the negation marker.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the glob body with the negation marker stripped.
    #[must_use]
    pub fn body(&self) -> &str {
        if self.negated {
            &self.text[NEGATION_MARKER.len_utf8()..]
        } else {
            &self.text
        }
    }

    /// Reports whether the pattern carries the `!` marker.
    #[must_use]
    pub const fn is_negated(&self) -> bool {
        self.negated
    }

    /// Returns the body split on `/`.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Reports whether the pattern matches `candidate`.
    ///
    /// The body is first matched against the whole candidate path. When that
    /// fails and the candidate lives below a directory, the body is matched
    /// against the leading segments of the candidate's parent directory, as
    /// many as the pattern has segments. A pattern naming a directory
    /// therefore matches everything nested beneath it. The comparison uses the
    /// parent only, never the candidate's final segment.
    ///
    /// The negation marker does not affect the result; callers fold
    /// [`is_negated`](Self::is_negated) in themselves.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::MalformedGlob`] when the body is not a valid
    /// glob expression.
    pub fn matches(&self, candidate: &Candidate) -> Result<bool, FilterError> {
        let matcher = self.matcher()?;
        if matcher.is_match(candidate.path()) {
            return Ok(true);
        }

        if candidate.parent() == "." {
            return Ok(false);
        }

        let depth = self.segments.len();
        let parent_segments = candidate.parent_segments();
        if depth > parent_segments.len() {
            return Ok(false);
        }

        let prefix = parent_segments[..depth].join("/");
        Ok(matcher.is_match(prefix))
    }

    fn matcher(&self) -> Result<&GlobMatcher, FilterError> {
        self.matcher
            .get_or_init(|| compile(self.body()))
            .as_ref()
            .map_err(|source| FilterError::malformed(&self.text, source.clone()))
    }
}

fn compile(body: &str) -> Result<GlobMatcher, globset::Error> {
    GlobBuilder::new(&shell_glob(body))
        .literal_separator(true)
        .backslash_escape(true)
        .build()
        .map(|glob| glob.compile_matcher())
}

/// Restricts `body` to plain shell-glob syntax before it reaches globset.
///
/// Braces are escaped so they match literally, and runs of `*` collapse to a
/// single `*` so no wildcard crosses `/`. Escape pairs and bracket classes
/// are copied unchanged.
fn shell_glob(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    let mut after_star = false;

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                out.push(ch);
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            '[' => {
                out.push(ch);
                if let Some(&marker @ ('!' | '^')) = chars.peek() {
                    out.push(marker);
                    chars.next();
                }
                if chars.peek() == Some(&']') {
                    out.push(']');
                    chars.next();
                }
                while let Some(inner) = chars.next() {
                    out.push(inner);
                    if inner == '\\' {
                        if let Some(escaped) = chars.next() {
                            out.push(escaped);
                        }
                    } else if inner == ']' {
                        break;
                    }
                }
            }
            '*' if after_star => continue,
            '{' | '}' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
        after_star = ch == '*';
    }
    out
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("text", &self.text)
            .field("negated", &self.negated)
            .field("segments", &self.segments)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Pattern {}

/// A candidate path prepared for matching.
///
/// The path is cleaned with the same rules as patterns, and its parent
/// directory is split once so every pattern in a set can reuse it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Candidate {
    path: String,
    parent: String,
    parent_segments: Vec<String>,
}

impl Candidate {
    /// Cleans `path` and precomputes its parent directory segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use filters::Candidate;
    ///
    /// let candidate = Candidate::new("docs//guide/../README.md");
    /// assert_eq!(candidate.path(), "docs/README.md");
    /// assert_eq!(candidate.parent(), "docs");
    /// assert_eq!(candidate.parent_segments(), ["docs"]);
    /// assert!(!candidate.is_root());
    /// ```
    #[must_use]
    pub fn new(path: &str) -> Self {
        let path = clean(path);
        let parent = parent(&path);
        let parent_segments = parent.split('/').map(str::to_owned).collect();
        Self {
            path,
            parent,
            parent_segments,
        }
    }

    /// Returns the cleaned candidate path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the cleaned parent directory (`.` for top-level entries).
    #[must_use]
    pub fn parent(&self) -> &str {
        &self.parent
    }

    /// Returns the parent directory split on `/`.
    #[must_use]
    pub fn parent_segments(&self) -> &[String] {
        &self.parent_segments
    }

    /// Reports whether the candidate cleans to the root (`.`).
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.path == "."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(raw: &str) -> Pattern {
        Pattern::parse(raw).expect("valid").expect("non-empty")
    }

    #[test]
    fn parse_trims_and_cleans() {
        let p = pattern("  docs/  ");
        assert_eq!(p.as_str(), "docs");
        assert!(!p.is_negated());
        assert_eq!(p.segments(), ["docs"]);
    }

    #[test]
    fn parse_keeps_negation_marker_through_cleaning() {
        let p = pattern("!docs/../docs/README.md");
        assert_eq!(p.as_str(), "!docs/README.md");
        assert_eq!(p.body(), "docs/README.md");
        assert_eq!(p.segments(), ["docs", "README.md"]);
    }

    #[test]
    fn parse_rejects_bare_marker_even_with_whitespace() {
        assert!(matches!(
            Pattern::parse("  !  "),
            Err(FilterError::InvalidPattern)
        ));
    }

    #[test]
    fn parse_drops_blank_input() {
        assert!(Pattern::parse("").unwrap().is_none());
        assert!(Pattern::parse(" \t ").unwrap().is_none());
    }

    #[test]
    fn direct_glob_match() {
        let candidate = Candidate::new("file.go");
        assert!(pattern("*.go").matches(&candidate).unwrap());
        assert!(pattern("file.?o").matches(&candidate).unwrap());
        assert!(pattern("[ef]ile.go").matches(&candidate).unwrap());
        assert!(!pattern("*.rs").matches(&candidate).unwrap());
    }

    #[test]
    fn star_does_not_cross_separators() {
        let candidate = Candidate::new("src/main.rs");
        assert!(!pattern("*.rs").matches(&candidate).unwrap());
        assert!(pattern("src/*.rs").matches(&candidate).unwrap());
    }

    #[test]
    fn directory_prefix_matches_nested_paths() {
        let p = pattern("docs");
        assert!(p.matches(&Candidate::new("docs/README.md")).unwrap());
        assert!(p.matches(&Candidate::new("docs/a/b/c.txt")).unwrap());
        assert!(!p.matches(&Candidate::new("other/docs.txt")).unwrap());
    }

    #[test]
    fn directory_prefix_uses_parent_only() {
        // The pattern has as many segments as the candidate, so only the
        // direct match can succeed; the parent has a single segment.
        let p = pattern("docs/*.txt");
        assert!(!p.matches(&Candidate::new("docs/README.md")).unwrap());

        let p = pattern("a/b");
        assert!(p.matches(&Candidate::new("a/b/c/d")).unwrap());
        assert!(!p.matches(&Candidate::new("a/bc/d")).unwrap());
    }

    #[test]
    fn top_level_candidates_skip_prefix_matching() {
        let p = pattern("docs");
        assert!(!p.matches(&Candidate::new("README.md")).unwrap());
    }

    #[test]
    fn malformed_glob_reports_pattern_text() {
        let p = pattern("![");
        let err = p.matches(&Candidate::new("file")).unwrap_err();
        assert!(err.is_malformed_glob());
        assert_eq!(err.pattern(), "![");
    }

    #[test]
    fn malformed_glob_error_is_sticky() {
        let p = pattern("docs/[a-");
        for path in ["x", "docs/y", "a/b/c"] {
            assert!(p.matches(&Candidate::new(path)).is_err());
        }
    }

    #[test]
    fn escaped_metacharacters_match_literally() {
        let p = pattern("foo\\?bar");
        assert!(p.matches(&Candidate::new("foo?bar")).unwrap());
        assert!(!p.matches(&Candidate::new("fooXbar")).unwrap());
    }

    #[test]
    fn shell_glob_escapes_braces_outside_classes() {
        assert_eq!(shell_glob("{draft}.md"), "\\{draft\\}.md");
        assert_eq!(shell_glob("a{"), "a\\{");
        assert_eq!(shell_glob("[{}]x"), "[{}]x");
        assert_eq!(shell_glob("\\{x"), "\\{x");
    }

    #[test]
    fn shell_glob_collapses_star_runs() {
        assert_eq!(shell_glob("**/x.go"), "*/x.go");
        assert_eq!(shell_glob("a***b"), "a*b");
        assert_eq!(shell_glob("a\\**"), "a\\**");
        assert_eq!(shell_glob("[*]*"), "[*]*");
    }

    #[test]
    fn shell_glob_copies_leading_bracket_in_class() {
        assert_eq!(shell_glob("[]{]"), "[]{]");
        assert_eq!(shell_glob("[!]]"), "[!]]");
    }

    #[test]
    fn braces_match_literally() {
        let p = pattern("{draft}.md");
        assert!(p.matches(&Candidate::new("{draft}.md")).unwrap());
        assert!(!p.matches(&Candidate::new("draft.md")).unwrap());
        assert!(!pattern("a{").matches(&Candidate::new("x")).unwrap());
        assert!(pattern("a{").matches(&Candidate::new("a{")).unwrap());
        assert!(!pattern("a}").matches(&Candidate::new("x")).unwrap());
    }

    #[test]
    fn double_star_stays_within_one_segment() {
        let p = pattern("**/x.go");
        assert!(!p.matches(&Candidate::new("x.go")).unwrap());
        assert!(p.matches(&Candidate::new("a/x.go")).unwrap());
        assert!(!p.matches(&Candidate::new("a/b/x.go")).unwrap());
    }

    #[test]
    fn equality_follows_cleaned_text() {
        assert_eq!(pattern("docs/"), pattern("./docs"));
        assert_ne!(pattern("docs"), pattern("!docs"));
    }

    #[test]
    fn candidate_root_detection() {
        assert!(Candidate::new(".").is_root());
        assert!(Candidate::new("./").is_root());
        assert!(Candidate::new("a/..").is_root());
        assert!(!Candidate::new("a").is_root());
    }
}
