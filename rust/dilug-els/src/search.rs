//! Search entry points combining the matchers with the skip-view
//! decomposition, plus the pruned direct scan used on hot paths.

use dilug_common::result::Result;
use dilug_common::verify_arg;

use crate::matchers::Matcher;
use crate::skip_seq::{class_count, extract};

/// Corpus positions of every occurrence of `ch`, ascending.
///
/// Precomputed once per pattern and reused as the candidate start list
/// across all skips of a scan.
pub fn char_positions(text: &[char], ch: char) -> Vec<usize> {
    text.iter()
        .enumerate()
        .filter_map(|(pos, &c)| (c == ch).then_some(pos))
        .collect()
}

/// Number of start positions at which a pattern of `pattern_len` characters
/// fits within `text_len` characters at `skip`.
pub fn valid_start_count(text_len: usize, pattern_len: usize, skip: i32) -> usize {
    if pattern_len == 0 {
        return 0;
    }
    let span = (pattern_len - 1) * skip.unsigned_abs() as usize;
    text_len.saturating_sub(span)
}

/// Finds every corpus start position where the matcher's pattern occurs at
/// `skip`, by searching each residue class sequence and mapping the offsets
/// back to corpus positions. Positions are returned ascending.
pub fn find_at_skip(text: &[char], matcher: &dyn Matcher, skip: i32) -> Result<Vec<usize>> {
    verify_arg!(skip, skip != 0);
    let mut positions = Vec::new();
    for class in 0..class_count(skip) {
        let seq = extract(text, skip, class)?;
        for offset in matcher.find_all(seq.chars()) {
            positions.push(seq.position_of(offset));
        }
    }
    positions.sort_unstable();
    Ok(positions)
}

/// Direct scan at one skip over a precomputed candidate list.
///
/// `candidates` holds the ascending corpus positions of `pattern[0]`; each
/// candidate is extended along the skip direction and kept when the whole
/// pattern matches. `skip == 1` ignores the candidates and compares
/// contiguous windows directly. Empty patterns and skip 0 yield no matches;
/// callers validate patterns when compiling their matcher.
pub fn find_at_skip_pruned(
    text: &[char],
    pattern: &[char],
    skip: i32,
    candidates: &[usize],
) -> Vec<usize> {
    let len = text.len();
    let k = pattern.len();
    let mut positions = Vec::new();
    if k == 0 || skip == 0 {
        return positions;
    }

    if skip == 1 {
        if k <= len {
            for start in 0..=len - k {
                if text[start..start + k] == *pattern {
                    positions.push(start);
                }
            }
        }
        return positions;
    }

    let step = skip.unsigned_abs() as usize;
    let span = (k - 1) * step;
    if skip > 0 {
        let Some(max_start) = len.checked_sub(span) else {
            return positions;
        };
        for &start in candidates {
            if start >= max_start {
                break;
            }
            if (1..k).all(|i| text[start + i * step] == pattern[i]) {
                positions.push(start);
            }
        }
    } else {
        for &start in candidates {
            if start < span {
                continue;
            }
            if (1..k).all(|i| text[start - i * step] == pattern[i]) {
                positions.push(start);
            }
        }
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::{MatcherKind, create_matcher};

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    #[test]
    fn test_char_positions() {
        let text = chars("abcabca");
        assert_eq!(char_positions(&text, 'a'), vec![0, 3, 6]);
        assert_eq!(char_positions(&text, 'c'), vec![2, 5]);
        assert!(char_positions(&text, 'z').is_empty());
    }

    #[test]
    fn test_valid_start_count() {
        assert_eq!(valid_start_count(26, 3, 5), 16);
        assert_eq!(valid_start_count(26, 3, -5), 16);
        assert_eq!(valid_start_count(26, 1, 25), 26);
        assert_eq!(valid_start_count(10, 3, 6), 0);
        assert_eq!(valid_start_count(10, 0, 2), 0);
    }

    #[test]
    fn test_alphabet_at_positive_skip() {
        let text = chars(ALPHABET);
        let matcher = create_matcher(MatcherKind::Kmp, "AFK").unwrap();
        assert_eq!(find_at_skip(&text, &matcher, 5).unwrap(), vec![0]);
    }

    #[test]
    fn test_direction_is_not_symmetric() {
        let text = chars(ALPHABET);
        let matcher = create_matcher(MatcherKind::Kmp, "AFK").unwrap();
        assert!(find_at_skip(&text, &matcher, -5).unwrap().is_empty());

        // Read backward, the same letters spell the reversed pattern,
        // anchored at its highest letter.
        let matcher = create_matcher(MatcherKind::Kmp, "KFA").unwrap();
        assert_eq!(find_at_skip(&text, &matcher, -5).unwrap(), vec![10]);
    }

    #[test]
    fn test_pruned_scan_agrees_with_class_search() {
        fastrand::seed(0xe15_u64);
        let alphabet = ['א', 'ב', 'ג', 'ד'];
        let text: Vec<char> = (0..400)
            .map(|_| alphabet[fastrand::usize(0..alphabet.len())])
            .collect();
        for _ in 0..40 {
            let pattern: Vec<char> = (0..fastrand::usize(1..5))
                .map(|_| alphabet[fastrand::usize(0..alphabet.len())])
                .collect();
            let pattern_text: String = pattern.iter().collect();
            let matcher = create_matcher(MatcherKind::BoyerMoore, &pattern_text).unwrap();
            let candidates = char_positions(&text, pattern[0]);
            for skip in [-7, -3, -1, 1, 2, 5, 11] {
                let from_classes = find_at_skip(&text, &matcher, skip).unwrap();
                let pruned = find_at_skip_pruned(&text, &pattern, skip, &candidates);
                assert_eq!(from_classes, pruned, "pattern {pattern_text:?} skip {skip}");
            }
        }
    }

    #[test]
    fn test_every_start_in_bounds() {
        let text = chars(ALPHABET);
        let pattern = chars("AFK");
        let candidates = char_positions(&text, 'A');
        for skip in [2, 5, -2, -5] {
            for start in find_at_skip_pruned(&text, &pattern, skip, &candidates) {
                let span = (pattern.len() - 1) * skip.unsigned_abs() as usize;
                if skip > 0 {
                    assert!(start + span < text.len());
                } else {
                    assert!(start >= span);
                }
            }
        }
    }

    #[test]
    fn test_single_letter_pattern_counts_every_occurrence() {
        let text = chars("aabaa");
        let matcher = create_matcher(MatcherKind::Kmp, "a").unwrap();
        for skip in [1, -1, 2, -2, 3] {
            let found = find_at_skip(&text, &matcher, skip).unwrap();
            assert_eq!(found, vec![0, 1, 3, 4], "skip {skip}");
        }
    }

    #[test]
    fn test_open_text_fast_path_matches_candidates_path() {
        let text = chars("abababa");
        let pattern = chars("aba");
        let candidates = char_positions(&text, 'a');
        assert_eq!(
            find_at_skip_pruned(&text, &pattern, 1, &candidates),
            vec![0, 2, 4]
        );
        // skip -1 walks the text right to left.
        assert_eq!(
            find_at_skip_pruned(&text, &pattern, -1, &candidates),
            vec![2, 4, 6]
        );
    }

    #[test]
    fn test_pattern_longer_than_any_class_sequence() {
        let text = chars("abcdef");
        let matcher = create_matcher(MatcherKind::Kmp, "abcd").unwrap();
        assert!(find_at_skip(&text, &matcher, 3).unwrap().is_empty());
        let candidates = char_positions(&text, 'a');
        assert!(find_at_skip_pruned(&text, &chars("abcd"), 3, &candidates).is_empty());
    }
}
