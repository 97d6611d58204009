//! Loading a dictionary of newline-separated words.
use std::borrow::Cow;
use std::fs::File;
use std::io::BufRead;
use std::path::Path;
use std::time::Instant;

use memmap2::Mmap;

use crate::speller::TrieSpeller;
use crate::trie::Trie;

pub mod error;

pub use self::error::DictionaryError;

/// Builds a speller from the word list at `path`, one word per line.
///
/// Lines are trimmed and blank lines skipped. Bytes that are not valid
/// UTF-8 are replaced rather than rejected.
pub fn load<P: AsRef<Path>>(path: P) -> Result<TrieSpeller, DictionaryError> {
    let path = path.as_ref();
    let open_error = |source| DictionaryError::Open {
        path: path.to_path_buf(),
        source,
    };

    let start = Instant::now();
    let file = File::open(path).map_err(open_error)?;

    // Zero-length files cannot be mapped on every platform.
    let is_empty = file.metadata().map_err(open_error)?.len() == 0;
    let trie = if is_empty {
        Trie::new()
    } else {
        let mmap = unsafe { Mmap::map(&file) }.map_err(open_error)?;
        let text = String::from_utf8_lossy(&mmap);
        if let Cow::Owned(_) = text {
            log::warn!("{}: invalid UTF-8 replaced", path.display());
        }
        parse(&text)
    };

    log::info!(
        "Loaded {} words from {} in {:?}",
        trie.len(),
        path.display(),
        start.elapsed()
    );

    Ok(TrieSpeller::new(trie))
}

/// Builds a speller from any buffered reader of newline-separated words.
///
/// Lines are handled as by [`load`], including the replacement of invalid
/// UTF-8.
pub fn from_reader<R: BufRead>(mut reader: R) -> Result<TrieSpeller, DictionaryError> {
    let start = Instant::now();
    let mut trie = Trie::new();
    let mut buf = Vec::new();
    let mut lossy = false;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            lossy = true;
        }
        insert_line(&mut trie, &line);
    }

    if lossy {
        log::warn!("reader: invalid UTF-8 replaced");
    }

    log::info!("Loaded {} words in {:?}", trie.len(), start.elapsed());
    Ok(TrieSpeller::new(trie))
}

fn parse(text: &str) -> Trie {
    let mut trie = Trie::new();
    text.lines().for_each(|line| insert_line(&mut trie, line));
    trie
}

#[inline(always)]
fn insert_line(trie: &mut Trie, line: &str) {
    let word = line.trim();
    if !word.is_empty() {
        trie.insert(word);
    }
}
