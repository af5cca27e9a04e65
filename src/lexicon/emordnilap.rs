use serde::Serialize;
use tracing::{debug, info};

use super::reverse_word;
use super::word_store::WordStore;

/// A dictionary word whose reversal is also in the dictionary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmordnilapPair {
    pub word: String,
    pub reversed: String,
}

impl EmordnilapPair {
    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

/// Emordnilaps found in one pass over the dictionary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmordnilapReport {
    /// The first `limit` matches in store order
    pub first: Vec<EmordnilapPair>,
    /// Longest match in the whole dictionary; ties keep the earliest
    pub longest: Option<EmordnilapPair>,
}

impl EmordnilapReport {
    pub fn longest_len(&self) -> usize {
        self.longest.as_ref().map_or(0, EmordnilapPair::len)
    }
}

/// Scan the dictionary once for words whose reversal is also a dictionary
/// word. Palindromes match themselves.
///
/// Until `limit` matches are collected every word is checked. After that
/// only words strictly longer than the current longest are checked, since
/// nothing else can change the result.
pub fn find_emordnilaps(store: &WordStore, limit: usize) -> EmordnilapReport {
    let words = store.words();
    let mut report = EmordnilapReport::default();
    let mut longest_len = 0usize;
    let mut position = 0usize;

    while position < words.len() && report.first.len() < limit {
        let word = &words[position];
        position += 1;
        if word.len() == 1 {
            continue;
        }
        let reversed = reverse_word(word);
        if store.contains(&reversed) {
            let pair = EmordnilapPair {
                word: word.clone(),
                reversed,
            };
            debug!("{} : {}", pair.word, pair.reversed);
            if pair.len() > longest_len {
                longest_len = pair.len();
                report.longest = Some(pair.clone());
            }
            report.first.push(pair);
        }
    }
    debug!(
        "Collected {} emordnilaps, continuing longest-only scan at {}",
        report.first.len(),
        position
    );

    for word in &words[position..] {
        if word.len() <= longest_len || word.len() == 1 {
            continue;
        }
        let reversed = reverse_word(word);
        if store.contains(&reversed) {
            longest_len = word.len();
            report.longest = Some(EmordnilapPair {
                word: word.clone(),
                reversed,
            });
        }
    }

    match &report.longest {
        Some(pair) => info!("Longest emordnilap: {} ({} characters)", pair.word, pair.len()),
        None => info!("No emordnilaps found"),
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(words: &[&str]) -> WordStore {
        WordStore::from_words(words.iter().map(|w| w.to_string()).collect(), 1000).unwrap()
    }

    fn pair(word: &str, reversed: &str) -> EmordnilapPair {
        EmordnilapPair {
            word: word.to_string(),
            reversed: reversed.to_string(),
        }
    }

    #[test]
    fn test_bat_tab() {
        let store = store(&["abet", "bat", "bate", "tab"]);
        let report = find_emordnilaps(&store, 10);
        assert_eq!(report.first, vec![pair("bat", "tab"), pair("tab", "bat")]);
        assert_eq!(report.longest, Some(pair("bat", "tab")));
        assert_eq!(report.longest_len(), 3);
    }

    #[test]
    fn test_none_found() {
        let store = store(&["cat", "dog"]);
        let report = find_emordnilaps(&store, 10);
        assert!(report.first.is_empty());
        assert_eq!(report.longest, None);
        assert_eq!(report.longest_len(), 0);
    }

    #[test]
    fn test_empty_dictionary() {
        let report = find_emordnilaps(&store(&[]), 10);
        assert_eq!(report, EmordnilapReport::default());
    }

    #[test]
    fn test_single_letters_skipped() {
        let report = find_emordnilaps(&store(&["a", "i"]), 10);
        assert!(report.first.is_empty());
        assert_eq!(report.longest, None);

        let report = find_emordnilaps(&store(&["a", "i"]), 0);
        assert_eq!(report.longest, None);
    }

    #[test]
    fn test_palindrome_matches_itself() {
        let report = find_emordnilaps(&store(&["level", "noon"]), 10);
        assert_eq!(report.first, vec![pair("level", "level"), pair("noon", "noon")]);
        assert_eq!(report.longest, Some(pair("level", "level")));
    }

    #[test]
    fn test_tie_keeps_earliest() {
        let report = find_emordnilaps(&store(&["part", "pots", "stop", "trap"]), 10);
        assert_eq!(report.first.len(), 4);
        assert_eq!(report.longest, Some(pair("part", "trap")));
    }

    #[test]
    fn test_report_cap_and_longest_only_phase() {
        let store = store(&[
            "bat", "deliver", "desserts", "gnus", "net", "reviled", "snug", "stressed", "tab",
            "ten",
        ]);
        let report = find_emordnilaps(&store, 2);

        assert_eq!(report.first, vec![pair("bat", "tab"), pair("deliver", "reviled")]);
        // the scan continues past the cap for the longest
        assert_eq!(report.longest, Some(pair("desserts", "stressed")));
        assert_eq!(report.longest_len(), 8);
    }

    #[test]
    fn test_zero_limit_still_finds_longest() {
        let report = find_emordnilaps(&store(&["bat", "gnus", "snug", "tab"]), 0);
        assert!(report.first.is_empty());
        assert_eq!(report.longest, Some(pair("gnus", "snug")));
    }
}
