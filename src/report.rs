use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::analysis::AnalysisReport;

const NOT_FOUND: &str = "Not found";

/// Render the console report
pub fn render(report: &AnalysisReport, limit: usize) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_report(&mut out, report, limit);
    out
}

fn write_report(out: &mut String, report: &AnalysisReport, limit: usize) -> std::fmt::Result {
    writeln!(out, "Number of words in dictionary: {}", report.dictionary_words)?;

    let emordnilaps = &report.emordnilaps;
    writeln!(out, "First {limit} emordnilap words:")?;
    for pair in &emordnilaps.first {
        writeln!(out, "{} : {}", pair.word, pair.reversed)?;
    }
    match &emordnilaps.longest {
        Some(pair) => writeln!(out, "Longest: {} ({} characters).", pair.word, pair.len())?,
        None => writeln!(out, "Longest: {NOT_FOUND}.")?,
    }

    writeln!(out)?;
    writeln!(out, "Number of valid words read: {}", report.valid_sample_words)?;
    writeln!(out, "Number of unique words read: {}", report.unique_sample_words)?;
    writeln!(
        out,
        "Number of unique words read that were found in the dictionary: {}",
        report.known_sample_words
    )?;

    let anagrams = &report.anagrams;
    writeln!(out)?;
    writeln!(out, "First {limit} words with anagrams:")?;
    for group in &anagrams.groups {
        writeln!(out, "{}: {}", group.word, group.anagrams.join(" "))?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Word with the most anagrams: {}",
        anagrams.most_anagrams.as_ref().map_or(NOT_FOUND, |m| m.word.as_str())
    )?;
    writeln!(
        out,
        "Longest word with anagram(s): {}",
        anagrams.longest.as_deref().unwrap_or(NOT_FOUND)
    )?;
    writeln!(out, "Total number of words with anagram(s): {}", anagrams.words_with_anagrams)?;
    writeln!(out, "Total number of anagrams found: {}", anagrams.total_anagrams)?;

    writeln!(out)?;
    writeln!(out, "Total run time (ms): {}", report.elapsed_ms)?;
    Ok(())
}

/// Write the report as pretty JSON
pub async fn write_stats(stats_path: &Path, report: &AnalysisReport) -> Result<()> {
    let file = tokio::fs::File::create(stats_path).await?;
    let mut writer = BufWriter::new(file);
    let json = serde_json::to_string_pretty(report)?;
    writer.write_all(json.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}
