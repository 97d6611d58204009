//! Speller: checking words and finding corrections.
use serde::{Deserialize, Serialize};

use self::worker::SpellerWorker;
use crate::trie::Trie;

pub mod alternatives;
pub mod correction;
mod worker;

pub use self::correction::{Correction, NO_CORRECTION};

/// Tuning of the correction search.
///
/// [`SpellerConfig::default`] enables every rewrite, any switch turned off
/// only narrows what can be corrected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellerConfig {
    /// match consonants regardless of case
    pub case_insensitive: bool,
    /// let any vowel stand for any other vowel
    pub vowel_substitution: bool,
    /// accept a word before a trailing run of repeated letters is used up
    pub trailing_duplicates: bool,
    /// skip extra copies of a letter repeated inside the word
    pub duplicate_runs: bool,
    /// give up after visiting this many search states
    pub max_visits: Option<usize>,
}

impl SpellerConfig {
    /// the configuration used by [`Speller::correct`]
    pub const fn default() -> SpellerConfig {
        SpellerConfig {
            case_insensitive: true,
            vowel_substitution: true,
            trailing_duplicates: true,
            duplicate_runs: true,
            max_visits: None,
        }
    }
}

impl Default for SpellerConfig {
    fn default() -> Self {
        SpellerConfig::default()
    }
}

/// Something that knows a set of words and can correct misspellings of
/// them.
pub trait Speller {
    /// exact membership, no rewrites applied
    fn is_correct(&self, word: &str) -> bool;

    /// the word itself if known, otherwise the first correction found
    /// under the default configuration
    fn correct(&self, word: &str) -> Correction {
        self.correct_with_config(word, &SpellerConfig::default())
    }

    /// like [`Speller::correct`], with explicit search settings
    fn correct_with_config(&self, word: &str, config: &SpellerConfig) -> Correction;
}

/// A [`Speller`] backed by an in-memory [`Trie`].
///
/// Holds no interior mutability, so once built it can be shared between
/// threads behind an `Arc`.
#[derive(Debug, Default, Clone)]
pub struct TrieSpeller {
    trie: Trie,
}

impl TrieSpeller {
    /// wraps an already populated trie
    pub fn new(trie: Trie) -> TrieSpeller {
        TrieSpeller { trie }
    }

    /// builds the dictionary from a list of words
    pub fn from_words<I, S>(words: I) -> TrieSpeller
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        TrieSpeller::new(words.into_iter().collect())
    }

    /// the underlying trie
    pub fn trie(&self) -> &Trie {
        &self.trie
    }
}

impl Speller for TrieSpeller {
    #[inline]
    fn is_correct(&self, word: &str) -> bool {
        self.trie.contains(word)
    }

    fn correct_with_config(&self, word: &str, config: &SpellerConfig) -> Correction {
        if word.is_empty() {
            return Correction::NotFound;
        }

        if self.trie.contains(word) {
            return Correction::Correct(word.into());
        }

        match SpellerWorker::new(&self.trie, word, config).search() {
            Some(value) => Correction::Suggested(value),
            None => Correction::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speller() -> TrieSpeller {
        TrieSpeller::from_words(["hello", "world", "balloon"])
    }

    #[test]
    fn exact_words_are_never_corrected() {
        let speller = speller();

        assert!(speller.is_correct("world"));
        assert_eq!(speller.correct("world"), Correction::Correct("world".into()));
    }

    #[test]
    fn empty_input() {
        let speller = speller();

        assert!(!speller.is_correct(""));
        assert_eq!(speller.correct(""), Correction::NotFound);
        assert_eq!(speller.correct("").to_string(), NO_CORRECTION);
    }

    #[test]
    fn disabled_rewrites() {
        let speller = speller();
        let config = SpellerConfig {
            vowel_substitution: false,
            ..SpellerConfig::default()
        };

        assert_eq!(speller.correct_with_config("hallo", &config), Correction::NotFound);
        assert_eq!(
            speller.correct_with_config("hEllo", &config),
            Correction::Suggested("hello".into())
        );

        let config = SpellerConfig {
            case_insensitive: false,
            vowel_substitution: false,
            ..SpellerConfig::default()
        };
        assert_eq!(speller.correct_with_config("hEllo", &config), Correction::NotFound);
        assert_eq!(speller.correct_with_config("Hello", &config), Correction::NotFound);

        let config = SpellerConfig {
            trailing_duplicates: false,
            ..SpellerConfig::default()
        };
        assert_eq!(speller.correct_with_config("helloo", &config), Correction::NotFound);

        let config = SpellerConfig {
            duplicate_runs: false,
            ..SpellerConfig::default()
        };
        assert_eq!(speller.correct_with_config("ballloon", &config), Correction::NotFound);
    }

    #[test]
    fn config_from_json() {
        let config: SpellerConfig =
            serde_json::from_str(r#"{ "duplicate_runs": false, "max_visits": 500 }"#).unwrap();

        assert!(config.case_insensitive);
        assert!(config.vowel_substitution);
        assert!(config.trailing_duplicates);
        assert!(!config.duplicate_runs);
        assert_eq!(config.max_visits, Some(500));

        let empty: SpellerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, SpellerConfig::default());
    }
}
