// WHY: the search and sort core, free of I/O. Every lookup here assumes the
// dictionary arrives sorted ascending and made of lowercase a-z words

pub mod anagram;
pub mod dedup;
pub mod emordnilap;
pub mod length_presence;
pub mod normalization;
pub mod signature;
pub mod word_store;

// Re-export core types
pub use anagram::{find_anagrams, AnagramCount, AnagramGroup, AnagramReport};
pub use dedup::{Deduplicator, SampleWords};
pub use emordnilap::{find_emordnilaps, EmordnilapPair, EmordnilapReport};
pub use length_presence::LengthPresence;
pub use normalization::{normalize_token, normalize_token_into};
pub use signature::{signature, Candidate, SignatureIndex};
pub use word_store::{binary_search, WordStore};

/// Reverse a word character by character
pub fn reverse_word(word: &str) -> String {
    word.chars().rev().collect()
}
