/*! Spelling correction over a character trie.

A dictionary of known words is loaded once into a [`trie::Trie`]. Queries
either find the word as-is, or search the trie depth-first for the first
word reachable by a small, ordered set of rewrites:

- any vowel may stand for any other vowel, in either case,
- consonants match regardless of case,
- extra copies of a repeated letter may be skipped, both at the end of the
  word and inside it.

There is no ranking: the first word found under the fixed substitution
order wins.

# Usage examples

```
use triespell::speller::{Correction, Speller, TrieSpeller};

let speller = TrieSpeller::from_words(["hello", "world", "balloon"]);

assert!(speller.is_correct("hello"));
assert_eq!(speller.correct("HELLO"), Correction::Suggested("hello".into()));
assert_eq!(speller.correct("helloo").to_string(), "hello");
assert_eq!(speller.correct("xyz").to_string(), "No correction available.");
```

A dictionary file with one word per line is loaded with
[`dictionary::load`]. The `triespell-bin` crate in the same repository is a
command-line frontend for this library.
*/

#![warn(missing_docs)]
pub mod dictionary;
pub mod paths;
pub mod speller;
pub mod tokenizer;
pub mod trie;
