//! Splitting running text into the words a speller is asked about.
use unic_segment::{WordBoundIndices, Words};

/// Unicode word segmentation of a string.
pub trait Tokenize {
    /// every segment with its byte offset, spaces and punctuation included
    fn word_bound_indices(&self) -> WordBoundIndices<'_>;
    /// only segments containing a letter or digit
    fn words(&self) -> Words<'_>;
}

impl Tokenize for str {
    fn word_bound_indices(&self) -> WordBoundIndices<'_> {
        WordBoundIndices::new(self)
    }

    fn words(&self) -> Words<'_> {
        Words::new(self, |s: &&str| s.chars().any(char::is_alphanumeric))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_skip_spaces_and_punctuation() {
        let msg = "Helo, wrld! This is a balllon.";

        assert_eq!(
            msg.words().collect::<Vec<_>>(),
            vec!["Helo", "wrld", "This", "is", "a", "balllon"]
        );
    }

    #[test]
    fn bounds_keep_offsets() {
        let msg = "hi there";

        assert_eq!(
            msg.word_bound_indices().collect::<Vec<_>>(),
            vec![(0, "hi"), (2, " "), (3, "there")]
        );
    }

    #[test]
    fn apostrophes_stay_inside_words() {
        assert_eq!("don't stop".words().collect::<Vec<_>>(), vec!["don't", "stop"]);
    }
}
