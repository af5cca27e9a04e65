use serde::Serialize;
use tracing::{debug, info};

use super::dedup::SampleWords;
use super::signature::{signature, SignatureIndex};
use super::word_store::WordStore;

/// A sample word together with its dictionary anagrams, sorted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnagramGroup {
    pub word: String,
    pub anagrams: Vec<String>,
}

/// A sample word and how many anagrams it has
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnagramCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnagramReport {
    /// Detailed listing for the first `limit` sample words with anagrams
    pub groups: Vec<AnagramGroup>,
    /// First sample word reaching the highest anagram count
    pub most_anagrams: Option<AnagramCount>,
    /// First sample word of the greatest length that has any anagram
    pub longest: Option<String>,
    pub words_with_anagrams: usize,
    pub total_anagrams: usize,
}

/// Find dictionary anagrams of every known sample word.
///
/// Builds a [`SignatureIndex`] over the dictionary words whose lengths
/// occur in the sample, then looks up each sample word's signature.
pub fn find_anagrams(sample: &SampleWords, store: &WordStore, limit: usize) -> AnagramReport {
    let index = SignatureIndex::build(store, &sample.lengths);
    find_anagrams_in(&sample.words, store, &index, limit)
}

/// Same as [`find_anagrams`] against an already built index
pub fn find_anagrams_in(
    sample_words: &[String],
    store: &WordStore,
    index: &SignatureIndex,
    limit: usize,
) -> AnagramReport {
    let mut report = AnagramReport::default();
    let mut longest_len = 0usize;
    let mut most = 0usize;

    for word in sample_words {
        if word.len() == 1 {
            continue;
        }
        let key = signature(word);
        let Some(range) = index.equal_range(&key) else {
            continue;
        };
        // the run includes the sample word's own dictionary entry
        let count = range.end() - range.start();
        if count == 0 {
            continue;
        }

        report.words_with_anagrams += 1;
        report.total_anagrams += count;
        if word.len() > longest_len {
            longest_len = word.len();
            report.longest = Some(word.clone());
        }
        if count > most {
            most = count;
            report.most_anagrams = Some(AnagramCount {
                word: word.clone(),
                count,
            });
        }

        if report.groups.len() < limit {
            let mut anagrams: Vec<String> = Vec::new();
            for candidate in &index.candidates()[range] {
                let Some(found) = store.get(candidate.index) else {
                    continue;
                };
                if found == word.as_str() {
                    continue;
                }
                let at = anagrams.partition_point(|w| w.as_str() <= found);
                anagrams.insert(at, found.to_string());
            }
            debug!("{}: {}", word, anagrams.join(" "));
            report.groups.push(AnagramGroup {
                word: word.clone(),
                anagrams,
            });
        }
    }

    info!(
        "Words with anagrams: {}, total anagrams: {}",
        report.words_with_anagrams, report.total_anagrams
    );
    report
}
