//! Hebrew letter predicates, final-form folding and unigram letter
//! frequencies of the canonical corpus.

/// Fallback frequency for letters absent from the precomputed table.
pub const DEFAULT_LETTER_FREQUENCY: f64 = 0.01;

/// Returns `true` for Hebrew consonants, including the five final forms.
pub fn is_hebrew_letter(ch: char) -> bool {
    matches!(ch, '\u{05D0}'..='\u{05EA}')
}

/// Returns `true` for Hebrew points, cantillation marks and in-verse
/// punctuation (U+0591..=U+05C7), all of which are stripped during
/// normalization.
pub fn is_hebrew_mark(ch: char) -> bool {
    matches!(ch, '\u{0591}'..='\u{05C7}')
}

/// Folds a final letter form to its base form; other characters pass through.
pub fn collapse_final(ch: char) -> char {
    match ch {
        'ך' => 'כ',
        'ם' => 'מ',
        'ן' => 'נ',
        'ף' => 'פ',
        'ץ' => 'צ',
        _ => ch,
    }
}

/// Relative frequency of a letter in the canonical corpus, used as the
/// unigram null model for significance scoring. Final forms share the
/// frequency of their base form. Returns `None` for letters outside the
/// table; callers substitute [`DEFAULT_LETTER_FREQUENCY`].
pub fn letter_frequency(ch: char) -> Option<f64> {
    let freq = match collapse_final(ch) {
        'א' => 0.0902,
        'ב' => 0.0534,
        'ג' => 0.0130,
        'ד' => 0.0350,
        'ה' => 0.0957,
        'ו' => 0.1064,
        'ז' => 0.0107,
        'ח' => 0.0297,
        'ט' => 0.0101,
        'י' => 0.1072,
        'כ' => 0.0321,
        'ל' => 0.0651,
        'מ' => 0.0606,
        'נ' => 0.0468,
        'ס' => 0.0101,
        'ע' => 0.0322,
        'פ' => 0.0179,
        'צ' => 0.0131,
        'ק' => 0.0152,
        'ר' => 0.0549,
        'ש' => 0.0550,
        'ת' => 0.0457,
        _ => return None,
    };
    Some(freq)
}
