//! Equidistant letter sequence primitives.
//!
//! The crate provides the exact-match pattern matchers ([`matchers`]), the
//! decomposition of a corpus into skip-distance character sequences
//! ([`skip_seq`]) and the search entry points that combine the two
//! ([`search`]). Everything operates on plain `&[char]` slices so the same
//! routines serve both the interactive scanner and the index builder.

pub mod matchers;
pub mod search;
pub mod skip_seq;

pub use matchers::{
    BoyerMooreMatcher, KmpMatcher, Matcher, MatcherKind, MatcherType, create_matcher,
};
pub use skip_seq::{SkipKind, SkipSequence, class_count, extract};
