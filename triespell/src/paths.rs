//! Where to look for a dictionary when none is given.
use std::path::{Path, PathBuf};

/// Checked in order by [`default_dictionary_path`].
pub const DEFAULT_DICTIONARY_PATHS: &[&str] = &["words", "/usr/share/dict/words"];

/// First existing file among [`DEFAULT_DICTIONARY_PATHS`].
pub fn default_dictionary_path() -> Option<PathBuf> {
    find_first(DEFAULT_DICTIONARY_PATHS)
}

fn find_first<P: AsRef<Path>>(candidates: &[P]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(P::as_ref)
        .find(|path| path.is_file())
        .map(Path::to_path_buf)
}
