use std::slice;
use std::sync::Arc;

use crate::{Candidate, FilterError, MatchObserver, NoopObserver, Pattern};

/// Normalized, immutable, ordered collection of patterns.
///
/// A `PatternSet` is the prepared form of a raw pattern list: blank entries
/// are gone, every pattern is cleaned, and each pattern carries its segment
/// breakdown. Build one with [`PatternSet::new`] (or [`normalize`]) and reuse
/// it for as many candidate paths as needed.
///
/// Evaluation folds over the patterns in order. A matching plain pattern sets
/// the result to `true`, a matching negated pattern sets it to `false`, and a
/// pattern that does not match leaves it unchanged. The last matching pattern
/// therefore wins. Paths no pattern matches yield `false`, and a candidate
/// that cleans to `.` is never matched.
///
/// The set is cheaply cloneable (the inner state is behind an [`Arc`]) and can
/// be shared across threads.
///
/// # Examples
///
/// ```
/// use filters::PatternSet;
///
/// let set = PatternSet::new(["docs", "!docs/README.md"]).unwrap();
///
/// assert!(set.matches("docs/guide.md").unwrap());
/// assert!(!set.matches("docs/README.md").unwrap());
/// assert!(!set.matches("src/lib.rs").unwrap());
/// ```
#[derive(Clone, Debug, Default)]
pub struct PatternSet {
    inner: Arc<PatternSetInner>,
}

#[derive(Debug, Default)]
struct PatternSetInner {
    patterns: Vec<Pattern>,
    has_exclusions: bool,
}

impl PatternSet {
    /// Normalizes `raw` into a pattern set.
    ///
    /// Each entry is trimmed; blank entries are dropped without occupying a
    /// slot. Remaining entries are cleaned lexically while keeping a leading
    /// `!`. Glob syntax is not checked here.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidPattern`] if any entry is the bare `!`
    /// marker. No partial set is produced.
    pub fn new<I, S>(raw: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns = Vec::new();
        let mut has_exclusions = false;

        for entry in raw {
            if let Some(pattern) = Pattern::parse(entry.as_ref())? {
                has_exclusions |= pattern.is_negated();
                patterns.push(pattern);
            }
        }

        Ok(Self {
            inner: Arc::new(PatternSetInner {
                patterns,
                has_exclusions,
            }),
        })
    }

    /// Returns the number of patterns kept after normalization.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.patterns.len()
    }

    /// Returns `true` when no pattern survived normalization.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.patterns.is_empty()
    }

    /// Reports whether any pattern is negated.
    #[must_use]
    pub fn has_exclusions(&self) -> bool {
        self.inner.has_exclusions
    }

    /// Iterates over the normalized patterns in evaluation order.
    pub fn iter(&self) -> slice::Iter<'_, Pattern> {
        self.inner.patterns.iter()
    }

    /// Iterates over the cleaned pattern strings, negation markers included.
    pub fn patterns(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.iter().map(Pattern::as_str)
    }

    /// Iterates over each pattern's segment breakdown, parallel to
    /// [`patterns`](Self::patterns).
    pub fn segments(&self) -> impl ExactSizeIterator<Item = &[String]> + '_ {
        self.iter().map(Pattern::segments)
    }

    /// Reports whether `path` is matched by the set.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::MalformedGlob`] when a pattern reached during
    /// evaluation is not a valid glob. The set remains usable afterwards.
    pub fn matches(&self, path: &str) -> Result<bool, FilterError> {
        self.matches_with(path, &NoopObserver)
    }

    /// Same as [`matches`](Self::matches), reporting progress to `observer`.
    pub fn matches_with<O>(&self, path: &str, observer: &O) -> Result<bool, FilterError>
    where
        O: MatchObserver + ?Sized,
    {
        self.matches_candidate(&Candidate::new(path), observer)
    }

    /// Evaluates an already prepared [`Candidate`].
    pub fn matches_candidate<O>(
        &self,
        candidate: &Candidate,
        observer: &O,
    ) -> Result<bool, FilterError>
    where
        O: MatchObserver + ?Sized,
    {
        if candidate.is_root() {
            return Ok(false);
        }

        let mut matched = false;
        let mut deciding = None;

        for pattern in self.iter() {
            let hit = pattern.matches(candidate)?;
            observer.rule_evaluated(
                candidate.path(),
                pattern.as_str(),
                pattern.is_negated(),
                hit,
            );
            if hit {
                matched = !pattern.is_negated();
                deciding = Some(pattern.as_str());
            }
        }

        observer.decided(candidate.path(), matched, deciding);
        Ok(matched)
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a Pattern;
    type IntoIter = slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Normalizes a raw pattern list. Equivalent to [`PatternSet::new`].
///
/// # Examples
///
/// ```
/// use filters::normalize;
///
/// let set = normalize(["docs", "", "  config  "]).unwrap();
/// assert_eq!(set.patterns().collect::<Vec<_>>(), ["docs", "config"]);
/// assert!(!set.has_exclusions());
/// ```
pub fn normalize<I, S>(raw: I) -> Result<PatternSet, FilterError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    PatternSet::new(raw)
}

/// Normalizes `raw` and reports whether `path` is matched.
///
/// Use a [`PatternSet`] directly when checking many paths against the same
/// list; this helper renormalizes on every call.
///
/// # Examples
///
/// ```
/// use filters::matches;
///
/// assert!(matches("file.go", ["*.go"]).unwrap());
/// assert!(!matches("file.go", ["*.go", "!file.go"]).unwrap());
/// assert!(!matches(".", ["*"]).unwrap());
/// ```
pub fn matches<I, S>(path: &str, raw: I) -> Result<bool, FilterError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let candidate = Candidate::new(path);
    if candidate.is_root() {
        return Ok(false);
    }
    PatternSet::new(raw)?.matches_candidate(&candidate, &NoopObserver)
}
