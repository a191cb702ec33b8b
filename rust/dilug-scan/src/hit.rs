//! Scan hits.

use serde::{Deserialize, Serialize};

use dilug_els::skip_seq::SkipKind;

/// A single occurrence found by a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    /// Primary word of the term that produced this hit.
    pub term: String,
    /// The spelling form that actually matched.
    pub form: String,
    /// Corpus position of the first letter.
    pub position: usize,
    /// Signed skip distance of the occurrence.
    pub skip: i32,
}

impl Hit {
    /// Whether this hit reads the open text or a genuine equidistant
    /// sequence.
    pub fn skip_kind(&self) -> SkipKind {
        SkipKind::of(self.skip)
    }

    /// Number of corpus positions between the first and last letter.
    pub fn span(&self) -> usize {
        let letters = self.form.chars().count();
        letters.saturating_sub(1) * self.skip.unsigned_abs() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(form: &str, skip: i32) -> Hit {
        Hit {
            term: form.to_string(),
            form: form.to_string(),
            position: 0,
            skip,
        }
    }

    #[test]
    fn test_skip_kind() {
        assert_eq!(hit("אב", 1).skip_kind(), SkipKind::OpenText);
        assert_eq!(hit("אב", -1).skip_kind(), SkipKind::OpenText);
        assert_eq!(hit("אב", 7).skip_kind(), SkipKind::Equidistant);
    }

    #[test]
    fn test_span() {
        assert_eq!(hit("אבג", 5).span(), 10);
        assert_eq!(hit("אבג", -5).span(), 10);
        assert_eq!(hit("א", 50).span(), 0);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(hit("אב", -3)).unwrap();
        assert_eq!(json["form"], "אב");
        assert_eq!(json["position"], 0);
        assert_eq!(json["skip"], -3);
    }
}
