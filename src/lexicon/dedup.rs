// WHY: nodes live in an arena and are addressed by index, and both insertion
// and the in-order walk are iterative, so skewed input (nearly sorted sample
// text) cannot grow the call stack

use std::cmp::Ordering;

use tracing::{debug, info};

use super::length_presence::LengthPresence;
use super::normalization::normalize_token_into;
use super::word_store::WordStore;
use crate::error::{Bound, ScanError, ScanResult};

#[derive(Debug)]
struct Node {
    word: String,
    left: Option<usize>,
    right: Option<usize>,
}

/// Unique, normalized sample words that are also dictionary words
#[derive(Debug, Clone, Default)]
pub struct SampleWords {
    /// Tokens that normalized to a non-empty word
    pub valid_words: usize,
    /// Distinct normalized words
    pub unique_words: usize,
    /// Distinct words found in the dictionary, ascending
    pub words: Vec<String>,
    /// Lengths occurring among `words`
    pub lengths: LengthPresence,
}

/// Binary search tree of normalized sample words
#[derive(Debug, Default)]
pub struct Deduplicator {
    nodes: Vec<Node>,
    root: Option<usize>,
    valid_words: usize,
    scratch: String,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a raw sample token and insert it. Tokens that normalize to
    /// nothing are dropped without being counted.
    pub fn push_token(&mut self, token: &str) -> bool {
        let mut scratch = std::mem::take(&mut self.scratch);
        normalize_token_into(token, &mut scratch);
        let inserted = self.insert(&scratch);
        self.scratch = scratch;
        inserted
    }

    /// Insert an already normalized word. Every non-empty word counts as
    /// valid; returns true only when the word was not already in the tree.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        self.valid_words += 1;

        let mut current = match self.root {
            Some(root) => root,
            None => {
                self.root = Some(self.alloc(word));
                return true;
            }
        };

        loop {
            let node = &self.nodes[current];
            let next = match word.cmp(node.word.as_str()) {
                Ordering::Equal => return false,
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
            match next {
                Some(child) => current = child,
                None => {
                    let child = self.alloc(word);
                    let parent = &mut self.nodes[current];
                    if word < parent.word.as_str() {
                        parent.left = Some(child);
                    } else {
                        parent.right = Some(child);
                    }
                    return true;
                }
            }
        }
    }

    fn alloc(&mut self, word: &str) -> usize {
        self.nodes.push(Node {
            word: word.to_string(),
            left: None,
            right: None,
        });
        self.nodes.len() - 1
    }

    pub fn valid_words(&self) -> usize {
        self.valid_words
    }

    /// Number of distinct words in the tree
    pub fn unique_words(&self) -> usize {
        self.nodes.len()
    }

    /// Longest root-to-leaf path, counted in nodes
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(usize, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((index, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.nodes[index];
            stack.extend(node.left.map(|c| (c, depth + 1)));
            stack.extend(node.right.map(|c| (c, depth + 1)));
        }
        height
    }

    /// Visit every node once, in ascending order, handing each word to
    /// `visit` by value. Nodes are emptied as they are visited and the
    /// arena is released when the walk ends.
    pub fn drain_in_order<F>(self, mut visit: F) -> ScanResult<()>
    where
        F: FnMut(String) -> ScanResult<()>,
    {
        let Deduplicator { mut nodes, root, .. } = self;
        let mut stack = Vec::new();
        let mut current = root;

        loop {
            while let Some(index) = current {
                stack.push(index);
                current = nodes[index].left;
            }
            let Some(index) = stack.pop() else { break };
            let node = &mut nodes[index];
            current = node.right;
            visit(std::mem::take(&mut node.word))?;
        }
        Ok(())
    }

    /// Ascending distinct words
    pub fn into_sorted(self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.unique_words());
        // visitor never fails
        let _ = self.drain_in_order(|word| {
            words.push(word);
            Ok(())
        });
        words
    }

    /// Walk the tree in order, keeping the words the dictionary knows.
    /// Fails once more than `max_sample_words` known words are found.
    pub fn spellcheck(self, store: &WordStore, max_sample_words: usize) -> ScanResult<SampleWords> {
        let valid_words = self.valid_words;
        let mut unique_words = 0usize;
        let mut words = Vec::new();
        let mut lengths = LengthPresence::new();

        self.drain_in_order(|word| {
            unique_words += 1;
            if store.contains(&word) {
                if words.len() >= max_sample_words {
                    return Err(ScanError::capacity(Bound::SampleWords, max_sample_words));
                }
                lengths.insert(word.len());
                words.push(word);
            } else {
                debug!("Not in dictionary: {}", word);
            }
            Ok(())
        })?;

        info!("Number of valid words read: {}", valid_words);
        info!("Number of unique words read: {}", unique_words);
        info!(
            "Number of unique words read that were found in the dictionary: {}",
            words.len()
        );

        Ok(SampleWords {
            valid_words,
            unique_words,
            words,
            lengths,
        })
    }
}
