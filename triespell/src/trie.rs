//! Character trie holding the dictionary.
use hashbrown::HashMap;

/// A node of the [`Trie`].
///
/// The character labelling a node is the key it is stored under in its
/// parent's children, so the root carries no label at all.
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    terminal: bool,
    children: HashMap<char, TrieNode>,
}

impl TrieNode {
    /// whether the path from the root to this node spells a dictionary word
    #[inline(always)]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// the child reached by the edge labelled `ch`, if any
    #[inline(always)]
    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    /// iterates over the labels and nodes directly below this one, in no
    /// particular order
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(ch, node)| (*ch, node))
    }
}

/// A set of words stored as a tree of characters.
///
/// Built once with [`Trie::insert`], then only read.
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    /// creates an empty trie
    pub fn new() -> Trie {
        Trie::default()
    }

    /// adds a word; inserting a word twice has no further effect
    ///
    /// The empty string is ignored, the root never marks a word.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }

        if !node.terminal {
            node.terminal = true;
            self.len += 1;
        }
    }

    /// exact, case-sensitive membership test
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).map_or(false, TrieNode::is_terminal)
    }

    /// the node reached by following `prefix` from the root
    pub fn find(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, ch| node.child(ch))
    }

    /// the root node, the starting point of every search
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// number of distinct words in the trie
    pub fn len(&self) -> usize {
        self.len
    }

    /// whether no word has been inserted yet
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        iter.into_iter().for_each(|word| trie.insert(word.as_ref()));
        trie
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        iter.into_iter().for_each(|word| self.insert(word.as_ref()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_contains() {
        let trie: Trie = ["hello", "help", "world"].iter().collect();

        assert!(trie.contains("hello"));
        assert!(trie.contains("help"));
        assert!(trie.contains("world"));
        assert!(!trie.contains("hel"));
        assert!(!trie.contains("helloo"));
        assert!(!trie.contains("Hello"));
        assert!(!trie.contains(""));
        assert_eq!(trie.len(), 3);
    }

    #[test]
    fn duplicate_insert_is_idempotent() {
        let mut trie = Trie::new();
        trie.insert("balloon");
        trie.insert("balloon");

        assert_eq!(trie.len(), 1);
        assert!(trie.contains("balloon"));
    }

    #[test]
    fn empty_word_never_marks_root() {
        let mut trie = Trie::new();
        trie.insert("");

        assert!(trie.is_empty());
        assert!(!trie.root().is_terminal());
        assert!(!trie.contains(""));
    }

    #[test]
    fn shared_prefixes_share_nodes() {
        let trie: Trie = ["tea", "ten", "to"].iter().collect();

        let t = trie.find("t").unwrap();
        let mut labels = t.children().map(|(ch, _)| ch).collect::<Vec<_>>();
        labels.sort();
        assert_eq!(labels, vec!['e', 'o']);

        let te = trie.find("te").unwrap();
        assert!(!te.is_terminal());
        assert_eq!(te.children().count(), 2);
        assert!(trie.find("tx").is_none());
    }

    #[test]
    fn prefix_word_is_terminal_and_has_children() {
        let trie: Trie = ["ball", "balloon"].iter().collect();

        let ball = trie.find("ball").unwrap();
        assert!(ball.is_terminal());
        assert!(ball.child('o').is_some());
    }

    #[test]
    fn non_ascii_words() {
        let trie: Trie = ["čáhci", "smørbrød"].iter().collect();

        assert!(trie.contains("čáhci"));
        assert!(trie.contains("smørbrød"));
        assert!(!trie.contains("cahci"));
    }
}
