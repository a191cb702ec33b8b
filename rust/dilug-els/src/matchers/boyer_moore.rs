//! Boyer-Moore matcher.

use ahash::AHashMap;

use dilug_common::error::Error;
use dilug_common::result::Result;

use crate::matchers::{Matcher, MatcherKind};

/// Boyer-Moore matcher compiled from a single pattern.
///
/// The bad character table is keyed by `char` rather than by byte so that
/// the full Unicode range (Hebrew letters in particular) shifts correctly.
/// Characters absent from the pattern shift by the whole pattern length.
#[derive(Debug, Clone)]
pub struct BoyerMooreMatcher {
    pattern: Vec<char>,
    bad_char: AHashMap<char, usize>,
    good_suffix: Vec<usize>,
}

impl BoyerMooreMatcher {
    /// Compiles `pattern`, failing when it is empty.
    pub fn new(pattern: &str) -> Result<BoyerMooreMatcher> {
        let pattern: Vec<char> = pattern.chars().collect();
        if pattern.is_empty() {
            return Err(Error::invalid_pattern("pattern is empty"));
        }
        let bad_char = build_bad_char_table(&pattern);
        let good_suffix = build_good_suffix_table(&pattern);
        Ok(BoyerMooreMatcher {
            pattern,
            bad_char,
            good_suffix,
        })
    }

    /// Shift aligning the mismatched text character with its rightmost
    /// pattern occurrence. Zero or negative alignments (occurrence at or
    /// right of the mismatch) yield 0; the good suffix shift takes over.
    fn bad_char_shift(&self, mismatch: usize, ch: char) -> usize {
        let entry = self
            .bad_char
            .get(&ch)
            .copied()
            .unwrap_or(self.pattern.len());
        (entry + mismatch + 1).saturating_sub(self.pattern.len())
    }
}

impl Matcher for BoyerMooreMatcher {
    fn pattern(&self) -> &[char] {
        &self.pattern
    }

    fn kind(&self) -> MatcherKind {
        MatcherKind::BoyerMoore
    }

    fn find_all(&self, sequence: &[char]) -> Vec<usize> {
        let mut results = Vec::new();
        let m = self.pattern.len();
        let n = sequence.len();
        if m > n {
            return results;
        }
        let mut i = 0;
        while i <= n - m {
            let mut j = m;
            while j > 0 && self.pattern[j - 1] == sequence[i + j - 1] {
                j -= 1;
            }
            if j == 0 {
                results.push(i);
                i += self.good_suffix[0];
            } else {
                let mismatch = j - 1;
                let bad = self.bad_char_shift(mismatch, sequence[i + mismatch]);
                i += bad.max(self.good_suffix[mismatch]);
            }
        }
        results
    }
}

/// Maps each pattern character (except the last) to `m - 1 - i` for its
/// rightmost occurrence `i`.
fn build_bad_char_table(pattern: &[char]) -> AHashMap<char, usize> {
    let m = pattern.len();
    let mut table = AHashMap::with_capacity(m);
    for (i, &ch) in pattern.iter().enumerate().take(m.saturating_sub(1)) {
        table.insert(ch, m - 1 - i);
    }
    table
}

/// Length of the longest pattern suffix ending at each position.
fn compute_suffixes(pattern: &[char]) -> Vec<usize> {
    let m = pattern.len();
    let mut suffixes = vec![0; m];
    suffixes[m - 1] = m;
    let mut f = 0_isize;
    let mut g = m as isize - 1;
    for i in (0..m - 1).rev() {
        let ii = i as isize;
        if ii > g && suffixes[(ii + m as isize - 1 - f) as usize] < (ii - g) as usize {
            suffixes[i] = suffixes[(ii + m as isize - 1 - f) as usize];
        } else {
            if ii < g {
                g = ii;
            }
            f = ii;
            while g >= 0 && pattern[g as usize] == pattern[(g + m as isize - 1 - f) as usize] {
                g -= 1;
            }
            suffixes[i] = (f - g) as usize;
        }
    }
    suffixes
}

fn build_good_suffix_table(pattern: &[char]) -> Vec<usize> {
    let m = pattern.len();
    let suffixes = compute_suffixes(pattern);
    let mut table = vec![m; m];
    let mut j = 0;
    for i in (0..m).rev() {
        if suffixes[i] == i + 1 {
            while j < m - 1 - i {
                if table[j] == m {
                    table[j] = m - 1 - i;
                }
                j += 1;
            }
        }
    }
    for i in 0..m.saturating_sub(1) {
        table[m - 1 - suffixes[i]] = m - 1 - i;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_suffixes() {
        assert_eq!(compute_suffixes(&chars("aaa")), vec![1, 2, 3]);
        assert_eq!(compute_suffixes(&chars("abab")), vec![0, 2, 0, 4]);
        assert_eq!(compute_suffixes(&chars("abcd")), vec![0, 0, 0, 4]);
    }

    #[test]
    fn test_good_suffix_shift_is_never_zero() {
        for pattern in ["ab", "abc", "abab", "aaa", "שלומ"] {
            let table = build_good_suffix_table(&chars(pattern));
            assert!(table.iter().all(|&shift| shift > 0), "pattern {pattern:?}");
        }
    }

    #[test]
    fn test_find_all_basic() {
        let matcher = BoyerMooreMatcher::new("abc").unwrap();
        assert_eq!(matcher.find_all(&chars("abcxabcxabc")), vec![0, 4, 8]);
        assert_eq!(matcher.find_all(&chars("xxabcxx")), vec![2]);
        assert!(matcher.find_all(&chars("acbacb")).is_empty());
    }

    #[test]
    fn test_adjacent_matches_with_short_pattern() {
        let matcher = BoyerMooreMatcher::new("ab").unwrap();
        assert_eq!(matcher.find_all(&chars("ababab")), vec![0, 2, 4]);
    }

    #[test]
    fn test_single_char_pattern() {
        let matcher = BoyerMooreMatcher::new("a").unwrap();
        assert_eq!(matcher.find_all(&chars("abaa")), vec![0, 2, 3]);
    }

    #[test]
    fn test_bad_char_table_covers_non_latin() {
        let matcher = BoyerMooreMatcher::new("תורה").unwrap();
        assert_eq!(matcher.find_all(&chars("בראשיתתורהסופ")), vec![6]);
    }

    #[test]
    fn test_mismatch_on_repeated_character_keeps_adjacent_start() {
        // The rightmost 'a' sits right of the pattern middle; the shift
        // after a last-position mismatch must not skip the neighboring
        // alignment.
        let matcher = BoyerMooreMatcher::new("xaab").unwrap();
        assert_eq!(matcher.find_all(&chars("yxaab")), vec![1]);
        assert_eq!(matcher.find_all(&chars("xaaxaab")), vec![3]);
    }

    #[test]
    fn test_empty_pattern_fails() {
        assert!(BoyerMooreMatcher::new("").is_err());
    }
}
