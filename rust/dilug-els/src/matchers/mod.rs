//! Exact pattern matchers used by the scanner and the search entry points.
//!
//! A matcher is compiled once per pattern and then reused across every
//! character sequence produced by the skip-view decomposition. Both
//! implementations report the full (possibly overlapping) set of match
//! offsets, so for any pattern and sequence they return identical results
//! and can be swapped freely.

mod boyer_moore;
mod kmp;

pub use boyer_moore::BoyerMooreMatcher;
pub use kmp::KmpMatcher;

use dilug_common::error::Error;
use dilug_common::result::Result;

/// Common interface for the exact pattern matchers.
pub trait Matcher: Send + Sync {
    /// The compiled pattern, as the character sequence that is searched for.
    fn pattern(&self) -> &[char];

    /// Identifies the matching algorithm.
    fn kind(&self) -> MatcherKind;

    /// Stable name of the matching algorithm.
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Returns the start offsets of every occurrence of the pattern in
    /// `sequence`, in ascending order, including overlapping occurrences.
    ///
    /// A pattern longer than `sequence` yields no offsets.
    fn find_all(&self, sequence: &[char]) -> Vec<usize>;
}

/// Matching algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatcherKind {
    /// Knuth-Morris-Pratt, the default scanning matcher.
    #[default]
    Kmp,
    /// Boyer-Moore with bad character and good suffix shift tables.
    BoyerMoore,
}

impl MatcherKind {
    /// Stable name used in configuration and command lines.
    pub const fn name(&self) -> &'static str {
        match self {
            MatcherKind::Kmp => "kmp",
            MatcherKind::BoyerMoore => "boyer-moore",
        }
    }
}

impl TryFrom<&str> for MatcherKind {
    type Error = Error;

    fn try_from(name: &str) -> Result<MatcherKind> {
        match name {
            "kmp" => Ok(MatcherKind::Kmp),
            "boyer-moore" => Ok(MatcherKind::BoyerMoore),
            _ => Err(Error::invalid_arg(
                "name",
                format!("unknown matcher '{name}', expected 'kmp' or 'boyer-moore'"),
            )),
        }
    }
}

/// Matcher type enumeration allowing static dispatch over the
/// implementations.
#[derive(Debug, Clone)]
pub enum MatcherType {
    Kmp(KmpMatcher),
    BoyerMoore(BoyerMooreMatcher),
}

impl Matcher for MatcherType {
    fn pattern(&self) -> &[char] {
        match self {
            MatcherType::Kmp(matcher) => matcher.pattern(),
            MatcherType::BoyerMoore(matcher) => matcher.pattern(),
        }
    }

    fn kind(&self) -> MatcherKind {
        match self {
            MatcherType::Kmp(matcher) => matcher.kind(),
            MatcherType::BoyerMoore(matcher) => matcher.kind(),
        }
    }

    fn find_all(&self, sequence: &[char]) -> Vec<usize> {
        match self {
            MatcherType::Kmp(matcher) => matcher.find_all(sequence),
            MatcherType::BoyerMoore(matcher) => matcher.find_all(sequence),
        }
    }
}

/// Compiles `pattern` for the requested algorithm.
///
/// Fails with an invalid pattern error when `pattern` is empty.
pub fn create_matcher(kind: MatcherKind, pattern: &str) -> Result<MatcherType> {
    match kind {
        MatcherKind::Kmp => Ok(MatcherType::Kmp(KmpMatcher::new(pattern)?)),
        MatcherKind::BoyerMoore => Ok(MatcherType::BoyerMoore(BoyerMooreMatcher::new(pattern)?)),
    }
}
