use serde::{Deserialize, Serialize};

/// Default number of emordnilap pairs and anagram groups listed in a report
pub const DEFAULT_REPORT_LIMIT: usize = 10;
/// Default upper bound on dictionary tokens
pub const DEFAULT_MAX_DICTIONARY_WORDS: usize = 400_000;
/// Default upper bound on unique sample words found in the dictionary
pub const DEFAULT_MAX_SAMPLE_WORDS: usize = 40_000;

/// Configuration for one analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// How many emordnilap pairs and anagram groups are reported in detail
    pub report_limit: usize,
    /// Loading more dictionary words than this aborts the run
    pub max_dictionary_words: usize,
    /// Finding more unique known sample words than this aborts the run
    pub max_sample_words: usize,
    /// Check that the dictionary is sorted before searching it.
    /// Off by default: an unsorted dictionary silently yields wrong lookups.
    pub verify_sorted: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            report_limit: DEFAULT_REPORT_LIMIT,
            max_dictionary_words: DEFAULT_MAX_DICTIONARY_WORDS,
            max_sample_words: DEFAULT_MAX_SAMPLE_WORDS,
            verify_sorted: false,
        }
    }
}
