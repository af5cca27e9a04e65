use std::io;
use std::path::Path;
use std::time::Instant;

use memmap2::Mmap;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::error::{Bound, ScanError, ScanResult};

/// Upper bound on the number of tokens a source may contain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    pub what: Bound,
    pub limit: usize,
}

/// Configuration for word source reading
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
    /// Reading more tokens than this fails the read
    pub capacity: Option<Capacity>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            buffer_size: 8192, // WHY: 8KB is optimal for most filesystems and network storage
            capacity: None,
        }
    }
}

impl ReaderConfig {
    /// Reader for a dictionary source holding at most `max_words` tokens
    pub fn dictionary(max_words: usize) -> Self {
        Self {
            capacity: Some(Capacity {
                what: Bound::Dictionary,
                limit: max_words,
            }),
            ..Default::default()
        }
    }
}

/// Statistics for one source read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub lines_read: u64,
    pub tokens_read: u64,
    pub bytes_read: u64,
    pub duration_ms: u64,
}

/// Reads a text source as a sequence of whitespace-separated tokens
pub struct WordReader {
    config: ReaderConfig,
}

impl WordReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read all tokens with async buffered I/O
    pub async fn read_words<P: AsRef<Path>>(
        &self,
        file_path: P,
    ) -> ScanResult<(Vec<String>, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = Instant::now();

        debug!("Starting async read of word source: {}", path.display());

        let file = File::open(path).await.map_err(|e| {
            warn!("Could not open {}: {}", path.display(), e);
            ScanError::source_unavailable(path, e)
        })?;

        // WHY: BufReader with custom buffer size reduces syscalls and improves throughput
        let reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut lines = reader.lines();
        let mut tokens = Vec::new();
        let mut line_count = 0u64;
        let mut byte_count = 0u64;

        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    byte_count += line.len() as u64 + 1; // +1 for newline
                    line_count += 1;
                    self.push_tokens(&line, &mut tokens)?;
                }
                Ok(None) => break,
                Err(e) => {
                    warn!(
                        "Read error in {} at line {}: {}",
                        path.display(),
                        line_count + 1,
                        e
                    );
                    return Err(read_error(path, e));
                }
            }
        }

        let stats = ReadStats {
            file_path: path.display().to_string(),
            lines_read: line_count,
            tokens_read: tokens.len() as u64,
            bytes_read: byte_count,
            duration_ms: start_time.elapsed().as_millis() as u64,
        };
        info!(
            "Read {}: {} tokens, {} lines, {} bytes in {}ms",
            stats.file_path, stats.tokens_read, stats.lines_read, stats.bytes_read, stats.duration_ms
        );
        Ok((tokens, stats))
    }

    /// Read all tokens through a memory map instead of buffered reads
    pub fn read_words_mmap<P: AsRef<Path>>(&self, file_path: P) -> ScanResult<(Vec<String>, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = Instant::now();

        let file = std::fs::File::open(path).map_err(|e| ScanError::source_unavailable(path, e))?;
        let len = file
            .metadata()
            .map_err(|e| ScanError::source_unavailable(path, e))?
            .len();

        let mut tokens = Vec::new();
        let mut line_count = 0u64;
        // WHY: mapping a zero-length file fails on some platforms
        if len > 0 {
            // SAFETY: the map is read-only and dropped before returning; a
            // concurrent truncation by another process is outside our contract
            let mmap = unsafe { Mmap::map(&file) }.map_err(|e| ScanError::source_unavailable(path, e))?;
            let content = std::str::from_utf8(&mmap).map_err(|_| ScanError::InvalidEncoding {
                path: path.to_path_buf(),
            })?;
            for line in content.lines() {
                line_count += 1;
                self.push_tokens(line, &mut tokens)?;
            }
        }

        let stats = ReadStats {
            file_path: path.display().to_string(),
            lines_read: line_count,
            tokens_read: tokens.len() as u64,
            bytes_read: len,
            duration_ms: start_time.elapsed().as_millis() as u64,
        };
        info!(
            "Mapped {}: {} tokens, {} bytes in {}ms",
            stats.file_path, stats.tokens_read, stats.bytes_read, stats.duration_ms
        );
        Ok((tokens, stats))
    }

    fn push_tokens(&self, line: &str, tokens: &mut Vec<String>) -> ScanResult<()> {
        for token in line.split_whitespace() {
            if let Some(capacity) = self.config.capacity {
                if tokens.len() >= capacity.limit {
                    warn!("{} array is full", capacity.what);
                    return Err(ScanError::capacity(capacity.what, capacity.limit));
                }
            }
            tokens.push(token.to_string());
        }
        Ok(())
    }
}

fn read_error(path: &Path, e: io::Error) -> ScanError {
    if e.kind() == io::ErrorKind::InvalidData {
        ScanError::InvalidEncoding {
            path: path.to_path_buf(),
        }
    } else {
        ScanError::source_unavailable(path, e)
    }
}

/// Convenience function for reading a source with default configuration
pub async fn read_words_async<P: AsRef<Path>>(file_path: P) -> ScanResult<Vec<String>> {
    let reader = WordReader::new(ReaderConfig::default());
    let (tokens, _stats) = reader.read_words(file_path).await?;
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio::fs;

    async fn create_test_file(dir: &Path, name: &str, content: &[u8]) -> std::path::PathBuf {
        let file_path = dir.join(name);
        fs::write(&file_path, content).await.unwrap();
        file_path
    }

    #[tokio::test]
    async fn test_read_tokens_across_lines() {
        let temp_dir = TempDir::new().unwrap();
        let reader = WordReader::new(ReaderConfig::default());
        let path = create_test_file(temp_dir.path(), "words.txt", b"abet bat\n\tbate  \n\ntab").await;

        let (tokens, stats) = reader.read_words(&path).await.unwrap();

        assert_eq!(tokens, vec!["abet", "bat", "bate", "tab"]);
        assert_eq!(stats.lines_read, 4);
        assert_eq!(stats.tokens_read, 4);
        assert!(stats.bytes_read > 0);
    }

    #[tokio::test]
    async fn test_read_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let reader = WordReader::new(ReaderConfig::default());
        let path = create_test_file(temp_dir.path(), "empty.txt", b"").await;

        let (tokens, stats) = reader.read_words(&path).await.unwrap();
        assert!(tokens.is_empty());
        assert_eq!(stats.bytes_read, 0);

        let (tokens, _) = reader.read_words_mmap(&path).unwrap();
        assert!(tokens.is_empty());
    }

    #[tokio::test]
    async fn test_read_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let reader = WordReader::new(ReaderConfig::default());
        let path = temp_dir.path().join("nonexistent.txt");

        let err = reader.read_words(&path).await.unwrap_err();
        assert!(err.is_source());

        let err = reader.read_words_mmap(&path).unwrap_err();
        assert!(err.is_source());
    }

    #[tokio::test]
    async fn test_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let reader = WordReader::new(ReaderConfig::default());
        let path = create_test_file(temp_dir.path(), "bad.txt", &[0x61, 0xFF, 0xFE, 0x0A]).await;

        let err = reader.read_words(&path).await.unwrap_err();
        assert!(matches!(err, ScanError::InvalidEncoding { .. }));

        let err = reader.read_words_mmap(&path).unwrap_err();
        assert!(matches!(err, ScanError::InvalidEncoding { .. }));
    }

    #[tokio::test]
    async fn test_capacity_boundary() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_test_file(temp_dir.path(), "dict.txt", b"a\nb\nc\n").await;

        let exact = WordReader::new(ReaderConfig::dictionary(3));
        let (tokens, _) = exact.read_words(&path).await.unwrap();
        assert_eq!(tokens.len(), 3);

        let short = WordReader::new(ReaderConfig::dictionary(2));
        let err = short.read_words(&path).await.unwrap_err();
        assert!(err.is_capacity());
        assert!(short.read_words_mmap(&path).unwrap_err().is_capacity());
    }

    #[tokio::test]
    async fn test_mmap_matches_buffered() {
        let temp_dir = TempDir::new().unwrap();
        let content = "The quick brown fox,\r\njumps over\nthe lazy dog.";
        let path = create_test_file(temp_dir.path(), "sample.txt", content.as_bytes()).await;
        let reader = WordReader::new(ReaderConfig {
            buffer_size: 16,
            capacity: None,
        });

        let (buffered, _) = reader.read_words(&path).await.unwrap();
        let (mapped, _) = reader.read_words_mmap(&path).unwrap();
        assert_eq!(buffered, mapped);
        assert_eq!(buffered.len(), 9);
    }

    #[tokio::test]
    async fn test_read_words_async_helper() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_test_file(temp_dir.path(), "w.txt", b"one two").await;
        assert_eq!(read_words_async(&path).await.unwrap(), vec!["one", "two"]);
    }
}
