// WHY: one entry point that runs the whole pass in the fixed order
// dictionary -> emordnilaps -> sample dedup -> anagrams, so the binary and
// the integration tests drive exactly the same pipeline

use std::path::Path;
use std::time::Instant;

use serde::Serialize;
use tracing::info;

use crate::config::AnalysisConfig;
use crate::error::ScanResult;
use crate::lexicon::{
    find_anagrams, find_emordnilaps, AnagramReport, Deduplicator, EmordnilapReport, WordStore,
};
use crate::reader::{ReaderConfig, WordReader};

/// Everything one run produces
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub dictionary_words: usize,
    pub valid_sample_words: usize,
    pub unique_sample_words: usize,
    pub known_sample_words: usize,
    pub emordnilaps: EmordnilapReport,
    pub anagrams: AnagramReport,
    pub elapsed_ms: u64,
}

/// Runs the emordnilap and anagram analysis for one dictionary and sample
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze already tokenized sources
    pub fn run<I, S>(&self, dictionary: Vec<String>, sample: I) -> ScanResult<AnalysisReport>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start_time = Instant::now();

        let store = WordStore::from_words(dictionary, self.config.max_dictionary_words)?;
        if self.config.verify_sorted {
            store.verify_sorted()?;
        }

        let emordnilaps = find_emordnilaps(&store, self.config.report_limit);

        let mut dedup = Deduplicator::new();
        for token in sample {
            dedup.push_token(token.as_ref());
        }
        let sample_words = dedup.spellcheck(&store, self.config.max_sample_words)?;

        let anagrams = find_anagrams(&sample_words, &store, self.config.report_limit);

        let elapsed_ms = start_time.elapsed().as_millis() as u64;
        info!("Analysis completed in {}ms", elapsed_ms);

        Ok(AnalysisReport {
            dictionary_words: store.len(),
            valid_sample_words: sample_words.valid_words,
            unique_sample_words: sample_words.unique_words,
            known_sample_words: sample_words.words.len(),
            emordnilaps,
            anagrams,
            elapsed_ms,
        })
    }

    /// Read both sources and analyze them. Either source failing aborts the
    /// run before any analysis.
    pub async fn run_files(
        &self,
        dictionary_path: &Path,
        sample_path: &Path,
        use_mmap: bool,
    ) -> ScanResult<AnalysisReport> {
        let start_time = Instant::now();

        let dictionary_reader = WordReader::new(ReaderConfig::dictionary(self.config.max_dictionary_words));
        let sample_reader = WordReader::new(ReaderConfig::default());

        let (dictionary, sample) = if use_mmap {
            let (dictionary, _) = dictionary_reader.read_words_mmap(dictionary_path)?;
            let (sample, _) = sample_reader.read_words_mmap(sample_path)?;
            (dictionary, sample)
        } else {
            let (dictionary, _) = dictionary_reader.read_words(dictionary_path).await?;
            let (sample, _) = sample_reader.read_words(sample_path).await?;
            (dictionary, sample)
        };

        let mut report = self.run(dictionary, &sample)?;
        report.elapsed_ms = start_time.elapsed().as_millis() as u64;
        Ok(report)
    }
}
