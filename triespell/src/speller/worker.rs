use smol_str::SmolStr;

use super::alternatives::{alternatives_with, Alternatives};
use super::SpellerConfig;
use crate::trie::{Trie, TrieNode};

/// The visit budget of [`SpellerConfig::max_visits`] ran out.
#[derive(Debug)]
struct Exhausted;

/// Index where the run of the last character, repeated up to the end of
/// the input, begins. For "balloo" this is 4.
#[inline(always)]
fn trailing_run_start(input: &[char]) -> usize {
    let mut start = input.len().saturating_sub(1);
    while start > 0 && input[start] == input[start - 1] {
        start -= 1;
    }
    start
}

/// Depth-first search of the trie for one misspelled input.
///
/// Characters of the edges taken are kept on `path` while descending and
/// popped when a subtree turns out to be a dead end, so when the search
/// succeeds `path` spells the corrected word.
pub(crate) struct SpellerWorker<'a> {
    trie: &'a Trie,
    config: &'a SpellerConfig,
    input: Vec<char>,
    trailing_run_start: usize,
    path: Vec<char>,
    visits: usize,
}

impl<'a> SpellerWorker<'a> {
    #[inline(always)]
    pub(crate) fn new(trie: &'a Trie, word: &str, config: &'a SpellerConfig) -> SpellerWorker<'a> {
        let input = word.chars().collect::<Vec<_>>();
        let trailing_run_start = trailing_run_start(&input);

        SpellerWorker {
            trie,
            config,
            path: Vec::with_capacity(input.len()),
            input,
            trailing_run_start,
            visits: 0,
        }
    }

    /// first word found under the substitution order, if any
    pub(crate) fn search(mut self) -> Option<SmolStr> {
        log::trace!("Beginning search for {:?}", self.input);

        if self.input.is_empty() {
            return None;
        }

        let root = self.trie.root();
        let found = match self.visit(root, 0) {
            Ok(found) => found,
            Err(Exhausted) => {
                log::warn!(
                    "{}: gave up after {} visits",
                    self.input.iter().collect::<String>(),
                    self.visits
                );
                false
            }
        };

        log::trace!("Search ended after {} visits, found: {}", self.visits, found);

        if found {
            Some(self.path.into_iter().collect())
        } else {
            None
        }
    }

    #[inline(always)]
    fn in_trailing_run(&self, index: usize) -> bool {
        index >= self.trailing_run_start
    }

    /// Tries to spell out `input[index..]` below `node`, which was reached
    /// by consuming `input[..index]`.
    fn visit(&mut self, node: &'a TrieNode, index: usize) -> Result<bool, Exhausted> {
        self.visits += 1;
        if let Some(max_visits) = self.config.max_visits {
            if self.visits > max_visits {
                return Err(Exhausted);
            }
        }

        if index == self.input.len() {
            return Ok(node.is_terminal());
        }

        // The rest of the input is a repeated letter; the word may already
        // be complete without all of its copies.
        if self.config.trailing_duplicates
            && index > 0
            && self.in_trailing_run(index - 1)
            && node.is_terminal()
        {
            return Ok(true);
        }

        let current = self.input[index];
        let alts = alternatives_with(current, self.config);
        if self.descend(node, &alts, index + 1)? {
            return Ok(true);
        }

        if !self.config.duplicate_runs || index < 1 || index >= self.input.len() - 1 {
            return Ok(false);
        }

        // Inside a run of a repeated letter: skip the remaining copies and
        // continue from the same node with the next different character.
        if current != self.input[index - 1] {
            return Ok(false);
        }

        match self.input[index + 1..].iter().position(|&ch| ch != current) {
            Some(offset) => {
                let next = index + 1 + offset;
                let alts = alternatives_with(self.input[next], self.config);
                self.descend(node, &alts, next + 1)
            }
            None => Ok(false),
        }
    }

    /// Visits the children of `node` labelled by `alts`, in priority
    /// order, stopping at the first that leads to a word.
    fn descend(
        &mut self,
        node: &'a TrieNode,
        alts: &Alternatives,
        next: usize,
    ) -> Result<bool, Exhausted> {
        for ch in alts {
            if let Some(child) = node.child(ch) {
                self.path.push(ch);
                if self.visit(child, next)? {
                    return Ok(true);
                }
                self.path.pop();
            }
        }

        Ok(false)
    }
}
