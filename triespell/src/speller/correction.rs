//! Outcome of a correction query.
use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Shown in place of a word when nothing could be corrected.
pub const NO_CORRECTION: &str = "No correction available.";

/// Result of [`Speller::correct`](super::Speller::correct)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Correction {
    /// the input is a dictionary word, returned unchanged
    Correct(SmolStr),
    /// the first dictionary word the search reached
    Suggested(SmolStr),
    /// no dictionary word is reachable
    NotFound,
}

impl Correction {
    /// the corrected word-form, if there is one
    pub fn value(&self) -> Option<&str> {
        match self {
            Correction::Correct(value) | Correction::Suggested(value) => Some(value),
            Correction::NotFound => None,
        }
    }

    /// whether the input was already a dictionary word
    pub fn is_correct(&self) -> bool {
        matches!(self, Correction::Correct(_))
    }

    /// whether a word was found at all
    pub fn is_found(&self) -> bool {
        !matches!(self, Correction::NotFound)
    }
}

impl fmt::Display for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value().unwrap_or(NO_CORRECTION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Correction::Correct("hello".into()).to_string(), "hello");
        assert_eq!(Correction::Suggested("world".into()).to_string(), "world");
        assert_eq!(Correction::NotFound.to_string(), NO_CORRECTION);
    }

    #[test]
    fn serialize() {
        assert_eq!(
            serde_json::to_string(&Correction::Suggested("hello".into())).unwrap(),
            r#"{"kind":"suggested","value":"hello"}"#
        );
        assert_eq!(
            serde_json::to_string(&Correction::NotFound).unwrap(),
            r#"{"kind":"notFound"}"#
        );
    }
}
