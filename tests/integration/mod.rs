// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture helper for creating temporary dictionary and sample files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Create a file with given content
    pub fn create_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Create a dictionary file, one word per line
    pub fn create_dictionary(&self, words: &[&str]) -> PathBuf {
        self.create_file("dictionary.txt", &words.join("\n"))
    }

    /// Create a sample text file
    pub fn create_sample(&self, text: &str) -> PathBuf {
        self.create_file("sample.txt", text)
    }

    /// Path inside the fixture that is never created
    pub fn missing_path(&self, name: &str) -> PathBuf {
        self.root_path.join(name)
    }
}

/// Sorted dictionary of `count` distinct five-letter words
pub fn synthetic_dictionary(count: usize) -> Vec<String> {
    let mut words: Vec<String> = (0..count)
        .map(|mut n| {
            let mut word = String::with_capacity(5);
            for _ in 0..5 {
                word.push((b'a' + (n % 26) as u8) as char);
                n /= 26;
            }
            word
        })
        .collect();
    words.sort();
    words
}
