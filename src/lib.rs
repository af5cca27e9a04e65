pub mod analysis;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod reader;
pub mod report;

// Re-export main types for convenient access
pub use analysis::{AnalysisReport, Analyzer};
pub use config::AnalysisConfig;
pub use error::{Bound, ScanError, ScanResult};

// Re-export the search and sort core
pub use lexicon::{
    binary_search, find_anagrams, find_emordnilaps, reverse_word, signature, Deduplicator,
    SignatureIndex, WordStore,
};
