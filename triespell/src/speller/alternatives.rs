//! Characters the search may put in place of an input character.
//!
//! The order of [`Alternatives`] is a priority: the matcher tries the
//! subtrees in this order and stops at the first word found.
use unic_ucd_category::GeneralCategory;

use super::SpellerConfig;

const LOWER_VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];
const UPPER_VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];
const MAX_ALTERNATIVES: usize = LOWER_VOWELS.len() + UPPER_VOWELS.len();

/// Ordered, deduplicated candidates for one input position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alternatives {
    chars: [char; MAX_ALTERNATIVES],
    len: usize,
}

impl Alternatives {
    fn single(ch: char) -> Alternatives {
        let mut chars = ['\0'; MAX_ALTERNATIVES];
        chars[0] = ch;
        Alternatives { chars, len: 1 }
    }

    fn cased(ch: char) -> Alternatives {
        let lower = single_lowercase(ch);
        let upper = single_uppercase(ch);

        let mut alts = Alternatives::single(lower);
        if upper != lower {
            alts.chars[1] = upper;
            alts.len = 2;
        }
        alts
    }

    fn vowels() -> Alternatives {
        let mut chars = ['\0'; MAX_ALTERNATIVES];
        chars[..LOWER_VOWELS.len()].copy_from_slice(&LOWER_VOWELS);
        chars[LOWER_VOWELS.len()..].copy_from_slice(&UPPER_VOWELS);
        Alternatives {
            chars,
            len: MAX_ALTERNATIVES,
        }
    }

    /// the candidates, highest priority first
    #[inline(always)]
    pub fn as_slice(&self) -> &[char] {
        &self.chars[..self.len]
    }

    /// iterates the candidates, highest priority first
    #[inline(always)]
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, char>> {
        self.as_slice().iter().copied()
    }

    /// number of candidates, always at least one
    pub fn len(&self) -> usize {
        self.len
    }

    /// never true, kept for symmetry with [`Alternatives::len`]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<'a> IntoIterator for &'a Alternatives {
    type Item = char;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, char>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// whether `ch` belongs to the vowel class, in either case
pub fn is_vowel(ch: char) -> bool {
    LOWER_VOWELS.contains(&single_lowercase(ch))
}

/// candidates for `ch` under the default configuration
///
/// - vowels: `a e i o u A E I O U`, whatever the vowel or its case,
/// - other letters: lowercase, then uppercase,
/// - anything else: `ch` only.
pub fn alternatives(ch: char) -> Alternatives {
    alternatives_with(ch, &SpellerConfig::default())
}

/// candidates for `ch`, honouring the case and vowel switches of `config`
pub fn alternatives_with(ch: char, config: &SpellerConfig) -> Alternatives {
    // Letter categories only: letter numbers and combining marks match exactly.
    if !GeneralCategory::of(ch).is_letter() {
        return Alternatives::single(ch);
    }

    if config.vowel_substitution && is_vowel(ch) {
        if config.case_insensitive {
            Alternatives::vowels()
        } else {
            let mut alts = Alternatives::vowels();
            alts.len = LOWER_VOWELS.len();
            if ch.is_uppercase() {
                alts.chars[..UPPER_VOWELS.len()].copy_from_slice(&UPPER_VOWELS);
            }
            alts
        }
    } else if config.case_insensitive {
        Alternatives::cased(ch)
    } else {
        Alternatives::single(ch)
    }
}

// Case mappings that expand to several chars (such as 'ß' to "SS") cannot
// label a single trie edge, so the char is kept as it is.
#[inline(always)]
fn single_lowercase(ch: char) -> char {
    let mut it = ch.to_lowercase();
    match (it.next(), it.next()) {
        (Some(lower), None) => lower,
        _ => ch,
    }
}

#[inline(always)]
fn single_uppercase(ch: char) -> char {
    let mut it = ch.to_uppercase();
    match (it.next(), it.next()) {
        (Some(upper), None) => upper,
        _ => ch,
    }
}
