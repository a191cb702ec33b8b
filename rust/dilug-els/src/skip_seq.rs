//! Decomposition of a character sequence into skip-distance views.
//!
//! A skip distance `d` (`d != 0`) partitions the corpus positions into
//! `|d|` residue classes by `position % |d|`. Walking one class in the
//! direction of `d` yields a linear character sequence in which an
//! equidistant letter sequence at skip `d` appears as a contiguous match.
//! Positive and negative skips of the same magnitude visit the same class
//! members in opposite orders and are searched as distinct directions.

use dilug_common::result::Result;
use dilug_common::verify_arg;

/// Classification of a skip distance.
///
/// Matches at `|skip| == 1` read the plain text and are reported separately
/// from genuine equidistant sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipKind {
    OpenText,
    Equidistant,
}

impl SkipKind {
    /// Classifies a non-zero skip distance.
    pub fn of(skip: i32) -> SkipKind {
        if skip.unsigned_abs() == 1 {
            SkipKind::OpenText
        } else {
            SkipKind::Equidistant
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            SkipKind::OpenText => "open-text",
            SkipKind::Equidistant => "equidistant",
        }
    }
}

/// The character sequence visited by one `(class, skip)` walk, together
/// with the corpus position of every visited character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipSequence {
    chars: Vec<char>,
    positions: Vec<usize>,
}

impl SkipSequence {
    /// Characters in visit order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Corpus positions in visit order, parallel to [`chars`](Self::chars).
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Maps an offset within the sequence back to its corpus position.
    ///
    /// Panics when `offset` is out of bounds.
    pub fn position_of(&self, offset: usize) -> usize {
        self.positions[offset]
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Number of residue classes induced by `skip`.
pub fn class_count(skip: i32) -> usize {
    skip.unsigned_abs() as usize
}

/// Extracts the ordered character sequence of one residue class.
///
/// For `skip > 0` the walk starts at the lowest class member (`class`
/// itself) and steps forward; for `skip < 0` it starts at the highest
/// in-bounds member and steps backward. Over all classes of a given skip,
/// every corpus position is visited exactly once.
pub fn extract(text: &[char], skip: i32, class: usize) -> Result<SkipSequence> {
    verify_arg!(skip, skip != 0);
    verify_arg!(class, class < class_count(skip));

    let step = skip.unsigned_abs() as usize;
    let len = text.len();
    if class >= len {
        return Ok(SkipSequence {
            chars: Vec::new(),
            positions: Vec::new(),
        });
    }

    let count = (len - 1 - class) / step + 1;
    let mut chars = Vec::with_capacity(count);
    let mut positions = Vec::with_capacity(count);
    if skip > 0 {
        for k in 0..count {
            let pos = class + k * step;
            chars.push(text[pos]);
            positions.push(pos);
        }
    } else {
        let highest = class + (count - 1) * step;
        for k in 0..count {
            let pos = highest - k * step;
            chars.push(text[pos]);
            positions.push(pos);
        }
    }
    Ok(SkipSequence { chars, positions })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_skip_kind() {
        assert_eq!(SkipKind::of(1), SkipKind::OpenText);
        assert_eq!(SkipKind::of(-1), SkipKind::OpenText);
        assert_eq!(SkipKind::of(2), SkipKind::Equidistant);
        assert_eq!(SkipKind::of(-50), SkipKind::Equidistant);
        assert_eq!(SkipKind::OpenText.name(), "open-text");
    }

    #[test]
    fn test_forward_extraction() {
        let text = chars("abcdefghij");
        let seq = extract(&text, 3, 0).unwrap();
        assert_eq!(seq.positions(), &[0, 3, 6, 9]);
        assert_eq!(seq.chars(), chars("adgj").as_slice());

        let seq = extract(&text, 3, 1).unwrap();
        assert_eq!(seq.positions(), &[1, 4, 7]);
        assert_eq!(seq.chars(), chars("beh").as_slice());

        let seq = extract(&text, 3, 2).unwrap();
        assert_eq!(seq.positions(), &[2, 5, 8]);
        assert_eq!(seq.chars(), chars("cfi").as_slice());
    }

    #[test]
    fn test_backward_extraction_mirrors_forward() {
        let text = chars("abcdefghij");
        for class in 0..3 {
            let forward = extract(&text, 3, class).unwrap();
            let backward = extract(&text, -3, class).unwrap();
            let mut reversed: Vec<usize> = backward.positions().to_vec();
            reversed.reverse();
            assert_eq!(forward.positions(), reversed.as_slice());
        }
    }

    #[test]
    fn test_backward_starts_at_highest_member() {
        let text = chars("abcdefgh");
        let seq = extract(&text, -3, 1).unwrap();
        assert_eq!(seq.positions(), &[7, 4, 1]);
        assert_eq!(seq.chars(), chars("heb").as_slice());
    }

    #[test]
    fn test_classes_partition_positions() {
        let text = chars("abcdefghijklmnopq");
        for skip in [2, 5, -4, -7, 1, -1] {
            let mut seen = vec![0_u32; text.len()];
            for class in 0..class_count(skip) {
                for &pos in extract(&text, skip, class).unwrap().positions() {
                    seen[pos] += 1;
                }
            }
            assert!(seen.iter().all(|&count| count == 1), "skip {skip}");
        }
    }

    #[test]
    fn test_class_beyond_text_is_empty() {
        let text = chars("ab");
        let seq = extract(&text, 5, 3).unwrap();
        assert!(seq.is_empty());
    }

    #[test]
    fn test_invalid_arguments() {
        let text = chars("abc");
        assert!(extract(&text, 0, 0).is_err());
        assert!(extract(&text, 3, 3).is_err());
    }
}
