//! Knuth-Morris-Pratt matcher.

use dilug_common::error::Error;
use dilug_common::result::Result;

use crate::matchers::{Matcher, MatcherKind};

/// KMP matcher compiled from a single pattern.
///
/// The failure function (`lps`) stores, for every pattern prefix, the length
/// of the longest proper prefix that is also a suffix, which lets the search
/// resume after a mismatch without re-reading the sequence.
#[derive(Debug, Clone)]
pub struct KmpMatcher {
    pattern: Vec<char>,
    lps: Vec<usize>,
}

impl KmpMatcher {
    /// Compiles `pattern`, failing when it is empty.
    pub fn new(pattern: &str) -> Result<KmpMatcher> {
        let pattern: Vec<char> = pattern.chars().collect();
        if pattern.is_empty() {
            return Err(Error::invalid_pattern("pattern is empty"));
        }
        let lps = compute_lps(&pattern);
        Ok(KmpMatcher { pattern, lps })
    }
}

impl Matcher for KmpMatcher {
    fn pattern(&self) -> &[char] {
        &self.pattern
    }

    fn kind(&self) -> MatcherKind {
        MatcherKind::Kmp
    }

    fn find_all(&self, sequence: &[char]) -> Vec<usize> {
        let mut results = Vec::new();
        let m = self.pattern.len();
        let mut i = 0;
        let mut j = 0;
        while i < sequence.len() {
            if self.pattern[j] == sequence[i] {
                i += 1;
                j += 1;
            }
            if j == m {
                results.push(i - j);
                j = self.lps[j - 1];
            } else if i < sequence.len() && self.pattern[j] != sequence[i] {
                if j != 0 {
                    j = self.lps[j - 1];
                } else {
                    i += 1;
                }
            }
        }
        results
    }
}

fn compute_lps(pattern: &[char]) -> Vec<usize> {
    let mut lps = vec![0; pattern.len()];
    let mut len = 0;
    let mut i = 1;
    while i < pattern.len() {
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len != 0 {
            len = lps[len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }
    lps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_lps_table() {
        assert_eq!(compute_lps(&chars("aaaa")), vec![0, 1, 2, 3]);
        assert_eq!(compute_lps(&chars("abab")), vec![0, 0, 1, 2]);
        assert_eq!(compute_lps(&chars("aabaaac")), vec![0, 1, 0, 1, 2, 2, 0]);
        assert_eq!(compute_lps(&chars("abcd")), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_find_all_basic() {
        let matcher = KmpMatcher::new("abc").unwrap();
        assert_eq!(matcher.find_all(&chars("abcxabcxabc")), vec![0, 4, 8]);
        assert_eq!(matcher.find_all(&chars("xxabcxx")), vec![2]);
        assert!(matcher.find_all(&chars("acbacb")).is_empty());
    }

    #[test]
    fn test_find_all_single_char() {
        let matcher = KmpMatcher::new("a").unwrap();
        assert_eq!(matcher.find_all(&chars("abaa")), vec![0, 2, 3]);
    }

    #[test]
    fn test_match_at_sequence_end() {
        let matcher = KmpMatcher::new("cd").unwrap();
        assert_eq!(matcher.find_all(&chars("abcd")), vec![2]);
    }

    #[test]
    fn test_empty_pattern_fails() {
        assert!(KmpMatcher::new("").is_err());
    }
}
