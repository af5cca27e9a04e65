use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wordplay::config::{
    DEFAULT_MAX_DICTIONARY_WORDS, DEFAULT_MAX_SAMPLE_WORDS, DEFAULT_REPORT_LIMIT,
};
use wordplay::{report, AnalysisConfig, Analyzer};

#[derive(Parser, Debug)]
#[command(name = "wordplay")]
#[command(about = "Find emordnilaps in a dictionary and anagrams of the words in a text sample")]
#[command(version)]
struct Args {
    /// Dictionary file: whitespace-separated lowercase words, sorted ascending
    #[arg(long, default_value = "dictionary.txt")]
    dictionary: PathBuf,

    /// Free-text sample file
    #[arg(long, default_value = "sample.txt")]
    sample: PathBuf,

    /// How many emordnilap pairs and anagram groups to list
    #[arg(long, default_value_t = DEFAULT_REPORT_LIMIT)]
    report_limit: usize,

    /// Abort if the dictionary holds more words than this
    #[arg(long, default_value_t = DEFAULT_MAX_DICTIONARY_WORDS)]
    max_dictionary_words: usize,

    /// Abort if more unique sample words than this are found in the dictionary
    #[arg(long, default_value_t = DEFAULT_MAX_SAMPLE_WORDS)]
    max_sample_words: usize,

    /// Fail on an unsorted dictionary instead of searching it anyway
    #[arg(long)]
    verify_sorted: bool,

    /// Use memory-mapped I/O instead of async buffered
    #[arg(long)]
    use_mmap: bool,

    /// Also write the report as JSON to this path
    #[arg(long)]
    stats_out: Option<PathBuf>,

    /// Log at debug level
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // WHY: structured JSON logging on stderr keeps stdout for the report
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!("Starting wordplay");
    info!(?args, "Parsed CLI arguments");

    let config = AnalysisConfig {
        report_limit: args.report_limit,
        max_dictionary_words: args.max_dictionary_words,
        max_sample_words: args.max_sample_words,
        verify_sorted: args.verify_sorted,
    };
    let analyzer = Analyzer::new(config);

    let analysis = analyzer
        .run_files(&args.dictionary, &args.sample, args.use_mmap)
        .await?;

    print!("{}", report::render(&analysis, args.report_limit));

    if let Some(stats_path) = &args.stats_out {
        report::write_stats(stats_path, &analysis).await?;
        info!("Wrote stats to {}", stats_path.display());
    }

    Ok(())
}
