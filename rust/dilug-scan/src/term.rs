//! Search terms and their spelling forms.

use serde::{Deserialize, Serialize};

/// A term submitted to a scan: the primary word plus optional alternate
/// spellings.
///
/// Hits always carry the primary word as their `term`, regardless of which
/// form matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTerm {
    pub word: String,
    /// Alternate spellings searched instead of the word when non-empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub forms: Vec<String>,
}

impl SearchTerm {
    pub fn new(word: impl Into<String>) -> SearchTerm {
        SearchTerm {
            word: word.into(),
            forms: Vec::new(),
        }
    }

    pub fn with_forms(
        word: impl Into<String>,
        forms: impl IntoIterator<Item = impl Into<String>>,
    ) -> SearchTerm {
        SearchTerm {
            word: word.into(),
            forms: forms.into_iter().map(Into::into).collect(),
        }
    }

    /// The spellings this term is searched under: the alternates when any
    /// are present, otherwise the word itself.
    pub fn search_forms(&self) -> Vec<&str> {
        if self.forms.is_empty() {
            vec![self.word.as_str()]
        } else {
            self.forms.iter().map(String::as_str).collect()
        }
    }
}

impl From<&str> for SearchTerm {
    fn from(word: &str) -> SearchTerm {
        SearchTerm::new(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forms_fall_back_to_word() {
        let term = SearchTerm::new("תורה");
        assert_eq!(term.search_forms(), vec!["תורה"]);

        let term = SearchTerm::with_forms("משה", ["משה", "מושה"]);
        assert_eq!(term.search_forms(), vec!["משה", "מושה"]);
    }

    #[test]
    fn test_terms_file_shape() {
        let term: SearchTerm = serde_json::from_str(r#"{"word": "אהרנ"}"#).unwrap();
        assert_eq!(term, SearchTerm::new("אהרנ"));

        let term: SearchTerm =
            serde_json::from_str(r#"{"word": "משה", "forms": ["משה", "מושה"]}"#).unwrap();
        assert_eq!(term.forms.len(), 2);
    }
}
