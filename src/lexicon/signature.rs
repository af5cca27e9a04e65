use std::ops::RangeInclusive;

use tracing::{debug, info};

use super::length_presence::LengthPresence;
use super::word_store::{binary_search, WordStore};

const ALPHABET: usize = 26;

/// Canonical anagram key: the word's letters in ascending order.
///
/// Lowercase a-z words go through a counting sort. Anything else is out of
/// contract and falls back to a char sort, which keeps the key
/// permutation-invariant.
pub fn signature(word: &str) -> String {
    if !word.bytes().all(|b| b.is_ascii_lowercase()) {
        let mut chars: Vec<char> = word.chars().collect();
        chars.sort_unstable();
        return chars.into_iter().collect();
    }

    let mut counts = [0usize; ALPHABET];
    for b in word.bytes() {
        counts[(b - b'a') as usize] += 1;
    }

    let mut out = String::with_capacity(word.len());
    for (letter, &count) in counts.iter().enumerate() {
        for _ in 0..count {
            out.push((b'a' + letter as u8) as char);
        }
    }
    out
}

/// A dictionary word reduced to its signature, remembering where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub signature: String,
    /// Position of the word in the [`WordStore`]
    pub index: usize,
}

impl AsRef<str> for Candidate {
    fn as_ref(&self) -> &str {
        &self.signature
    }
}

/// Signatures of the dictionary words worth considering, sorted by signature
/// so that all anagrams of a word sit in one contiguous run.
#[derive(Debug, Clone, Default)]
pub struct SignatureIndex {
    candidates: Vec<Candidate>,
}

impl SignatureIndex {
    /// Index every dictionary word longer than one letter whose length
    /// occurs in `lengths`.
    pub fn build(store: &WordStore, lengths: &LengthPresence) -> Self {
        let mut candidates: Vec<Candidate> = store
            .words()
            .iter()
            .enumerate()
            .filter(|(_, word)| word.len() > 1 && lengths.contains(word.len()))
            .map(|(index, word)| Candidate {
                signature: signature(word),
                index,
            })
            .collect();

        debug!("Sorting {} anagram candidates", candidates.len());
        heap_sort_by_signature(&mut candidates);
        info!("Anagram candidates indexed: {}", candidates.len());

        Self { candidates }
    }

    /// Index of some candidate whose signature equals `key`
    pub fn binary_search(&self, key: &str) -> Option<usize> {
        binary_search(key, self.candidates.as_slice())
    }

    /// Full run of candidates sharing `key`, as positions into [`Self::candidates`]
    pub fn equal_range(&self, key: &str) -> Option<RangeInclusive<usize>> {
        let found = self.binary_search(key)?;
        let mut first = found;
        let mut last = found;
        while first > 0 && self.candidates[first - 1].signature == key {
            first -= 1;
        }
        while last + 1 < self.candidates.len() && self.candidates[last + 1].signature == key {
            last += 1;
        }
        Some(first..=last)
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// In-place heap sort ascending by signature. Worst case O(n log n) with
/// no extra space and no recursion.
pub fn heap_sort_by_signature(items: &mut [Candidate]) {
    let n = items.len();
    if n < 2 {
        return;
    }
    for start in (0..n / 2).rev() {
        sift_down(items, start, n);
    }
    for end in (1..n).rev() {
        items.swap(0, end);
        sift_down(items, 0, end);
    }
}

/// Restore the max-heap property below `parent`, looking only at `items[..len]`
fn sift_down(items: &mut [Candidate], mut parent: usize, len: usize) {
    loop {
        let left = parent * 2 + 1;
        if left >= len {
            return;
        }
        let mut biggest = left;
        let right = left + 1;
        if right < len && items[biggest].signature < items[right].signature {
            biggest = right;
        }
        if items[parent].signature >= items[biggest].signature {
            return;
        }
        items.swap(parent, biggest);
        parent = biggest;
    }
}
