use std::sync::Arc;

use triespell::speller::{Correction, Speller, TrieSpeller, NO_CORRECTION};

const WORDS: [&str; 3] = ["hello", "world", "balloon"];

fn speller() -> TrieSpeller {
    TrieSpeller::from_words(WORDS)
}

fn corrected(speller: &TrieSpeller, input: &str) -> String {
    speller.correct(input).to_string()
}

/// every way of flipping the case of the letters of `word`
fn case_variants(word: &str) -> Vec<String> {
    let chars = word.chars().collect::<Vec<_>>();
    (0..1u32 << chars.len())
        .map(|mask| {
            chars
                .iter()
                .enumerate()
                .map(|(i, ch)| {
                    if mask & (1 << i) != 0 {
                        ch.to_ascii_uppercase()
                    } else {
                        *ch
                    }
                })
                .collect()
        })
        .collect()
}

#[test]
fn scenarios() {
    let speller = speller();

    assert_eq!(corrected(&speller, "hello"), "hello");
    assert_eq!(corrected(&speller, "HELLO"), "hello");
    assert_eq!(corrected(&speller, "hallo"), "hello");
    assert_eq!(corrected(&speller, "helloo"), "hello");
    assert_eq!(corrected(&speller, "ballloon"), "balloon");
    assert_eq!(corrected(&speller, "xyz"), NO_CORRECTION);
}

#[test]
fn dictionary_words_are_correct() {
    let speller = speller();

    for word in WORDS {
        assert!(speller.is_correct(word));
        assert_eq!(speller.correct(word), Correction::Correct(word.into()));
    }
}

#[test]
fn unreachable_words_are_not_corrected() {
    let speller = speller();

    for input in ["xyz", "abc", "hell", "worlds", "ballon", "h3llo", "hello world"] {
        assert_eq!(speller.correct(input), Correction::NotFound, "for {:?}", input);
    }
}

#[test]
fn empty_input() {
    let speller = speller();

    assert_eq!(speller.correct(""), Correction::NotFound);
    assert_eq!(corrected(&speller, ""), "No correction available.");
}

#[test]
fn case_insensitive() {
    let speller = speller();

    for word in WORDS {
        for variant in case_variants(word) {
            assert_eq!(corrected(&speller, &variant), word, "for {:?}", variant);
        }
    }
}

#[test]
fn vowels_are_interchangeable() {
    let speller = speller();

    for word in WORDS {
        for (i, ch) in word.char_indices() {
            if !"aeiou".contains(ch) {
                continue;
            }

            for vowel in "aeiouAEIOU".chars() {
                let mut variant = word.to_string();
                variant.replace_range(i..i + 1, &vowel.to_string());
                assert_eq!(corrected(&speller, &variant), word, "for {:?}", variant);
            }
        }
    }

    assert_eq!(corrected(&speller, "HAllU"), "hello");
    assert_eq!(corrected(&speller, "wUrld"), "world");
    assert_eq!(corrected(&speller, "bilLaUn"), "balloon");
}

#[test]
fn consonants_are_not_substituted() {
    let speller = speller();

    for input in ["jello", "hekko", "wocld", "worle", "balloom", "pallood"] {
        assert_eq!(speller.correct(input), Correction::NotFound, "for {:?}", input);
    }
}

#[test]
fn trailing_duplicates_collapse() {
    let speller = speller();

    for word in WORDS {
        let last = word.chars().last().unwrap();
        for extra in 1..5 {
            let input = format!("{}{}", word, last.to_string().repeat(extra));
            assert_eq!(corrected(&speller, &input), word, "for {:?}", input);
        }
    }
}

#[test]
fn interior_runs_are_absorbed() {
    let speller = speller();

    for word in WORDS {
        let chars = word.chars().collect::<Vec<_>>();
        for i in 1..chars.len() - 1 {
            for copies in 2..5 {
                let input = chars[..i]
                    .iter()
                    .chain(std::iter::repeat(&chars[i]).take(copies))
                    .chain(chars[i + 1..].iter())
                    .collect::<String>();
                assert_eq!(corrected(&speller, &input), word, "for {:?}", input);
            }
        }
    }
}

#[test]
fn combined_rewrites() {
    let speller = speller();

    assert_eq!(corrected(&speller, "HEELLOOO"), "hello");
    assert_eq!(corrected(&speller, "Wooorld"), "world");
    assert_eq!(corrected(&speller, "bAlllaaann"), "balloon");
}

#[test]
fn shared_between_threads() {
    let speller: Arc<dyn Speller + Send + Sync> = Arc::new(speller());

    let handles = ["HELLO", "wurld", "ballloon", "xyz"]
        .into_iter()
        .map(|input| {
            let speller = Arc::clone(&speller);
            std::thread::spawn(move || speller.correct(input).to_string())
        })
        .collect::<Vec<_>>();

    let results = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect::<Vec<_>>();

    assert_eq!(results, vec!["hello", "world", "balloon", NO_CORRECTION]);
}
