use std::cmp::Ordering;

use tracing::{debug, info};

use crate::error::{Bound, ScanError, ScanResult};

/// Plain lexicographic binary search over a slice assumed sorted ascending.
/// Returns the index of some element equal to `target`; with duplicates,
/// which one is unspecified.
pub fn binary_search<T: AsRef<str>>(target: &str, words: &[T]) -> Option<usize> {
    let mut left = 0usize;
    let mut right = words.len();

    // half-open [left, right)
    while left < right {
        let middle = left + (right - left) / 2;
        match target.cmp(words[middle].as_ref()) {
            Ordering::Less => right = middle,
            Ordering::Greater => left = middle + 1,
            Ordering::Equal => return Some(middle),
        }
    }
    None
}

/// The dictionary, held in load order.
///
/// Load order must already be ascending: every lookup depends on it, and
/// nothing checks it unless [`WordStore::verify_sorted`] is called.
/// Duplicates are kept.
#[derive(Debug, Clone, Default)]
pub struct WordStore {
    words: Vec<String>,
}

impl WordStore {
    /// Build a store from dictionary tokens, failing if there are more than `max_words`
    pub fn from_words(words: Vec<String>, max_words: usize) -> ScanResult<Self> {
        if words.len() > max_words {
            return Err(ScanError::capacity(Bound::Dictionary, max_words));
        }
        info!("Number of words in dictionary: {}", words.len());
        Ok(Self { words })
    }

    /// Check the sortedness precondition, reporting the first offending position
    pub fn verify_sorted(&self) -> ScanResult<()> {
        if let Some(position) = self.words.windows(2).position(|pair| pair[0] > pair[1]) {
            debug!("Dictionary order breaks at {}", position);
            return Err(ScanError::UnsortedDictionary { position });
        }
        Ok(())
    }

    pub fn binary_search(&self, target: &str) -> Option<usize> {
        binary_search(target, self.words.as_slice())
    }

    pub fn contains(&self, target: &str) -> bool {
        self.binary_search(target).is_some()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
