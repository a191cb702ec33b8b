//! Dictionary trie walked during index builds.

use ahash::AHashMap;

/// Node id of the trie root.
pub(crate) const ROOT: u32 = 0;

struct TrieNode {
    children: AHashMap<char, u32>,
    word: Option<u32>,
}

impl TrieNode {
    fn new() -> TrieNode {
        TrieNode {
            children: AHashMap::new(),
            word: None,
        }
    }
}

/// A prefix tree over dictionary words, nodes addressed by id.
///
/// One walk from a corpus position descends a letter at a time and reports
/// every dictionary word ending at the current depth, so all words starting
/// at a given (position, skip) are found in a single pass.
pub(crate) struct Trie {
    nodes: Vec<TrieNode>,
    words: Vec<String>,
}

impl Trie {
    pub fn new() -> Trie {
        Trie {
            nodes: vec![TrieNode::new()],
            words: Vec::new(),
        }
    }

    /// Adds `word`. Inserting the same word again shares its id.
    pub fn insert(&mut self, word: &str) {
        let mut node = ROOT;
        for ch in word.chars() {
            node = self.child_or_insert(node, ch);
        }
        let node = &mut self.nodes[node as usize];
        if node.word.is_none() {
            node.word = Some(self.words.len() as u32);
            self.words.push(word.to_string());
        }
    }

    fn child_or_insert(&mut self, node: u32, ch: char) -> u32 {
        if let Some(&child) = self.nodes[node as usize].children.get(&ch) {
            child
        } else {
            let child = self.nodes.len() as u32;
            self.nodes.push(TrieNode::new());
            self.nodes[node as usize].children.insert(ch, child);
            child
        }
    }

    /// Child of `node` along `ch`, if any.
    pub fn child(&self, node: u32, ch: char) -> Option<u32> {
        self.nodes[node as usize].children.get(&ch).copied()
    }

    /// Id of the word ending at `node`, if any.
    pub fn word_id(&self, node: u32) -> Option<u32> {
        self.nodes[node as usize].word
    }

    pub fn word(&self, id: u32) -> &str {
        &self.words[id as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_walk() {
        let mut trie = Trie::new();
        trie.insert("אב");
        trie.insert("אבג");
        trie.insert("בג");

        let node = trie.child(ROOT, 'א').unwrap();
        assert_eq!(trie.word_id(node), None);

        let node = trie.child(node, 'ב').unwrap();
        let id = trie.word_id(node).unwrap();
        assert_eq!(trie.word(id), "אב");

        let node = trie.child(node, 'ג').unwrap();
        let id = trie.word_id(node).unwrap();
        assert_eq!(trie.word(id), "אבג");

        assert_eq!(trie.child(ROOT, 'ג'), None);
    }

    #[test]
    fn test_duplicate_insert_is_shared() {
        let mut trie = Trie::new();
        trie.insert("אב");
        trie.insert("אב");

        let node = trie.child(ROOT, 'א').unwrap();
        let node = trie.child(node, 'ב').unwrap();
        assert_eq!(trie.word_id(node), Some(0));
    }
}
