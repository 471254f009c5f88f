//! Journal Reader: replay with torn-tail detection
//!
//! Reads all journal files in index order and deserializes each line back
//! into a `Transaction`. A line that fails to parse is recorded as a
//! corruption and skipped; the expected case is a torn final line left by
//! a crash mid-append, in which case the valid prefix is recovered.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::warn;
use types::transaction::Transaction;

use crate::journal::JournalError;

/// Structured corruption record for diagnostics.
#[derive(Debug, Clone)]
pub struct CorruptionRecord {
    /// Journal file containing the bad line.
    pub file: PathBuf,
    /// 1-based line number within the file.
    pub line: usize,
    /// Parse failure detail.
    pub detail: String,
}

/// Sequential reader over a journal directory.
pub struct JournalReader {
    /// All journal file paths, sorted by index.
    files: Vec<PathBuf>,
}

impl JournalReader {
    /// Open a reader over all journal files in the given directory.
    ///
    /// A missing directory reads as an empty journal.
    pub fn open(dir: &Path) -> Result<Self, JournalError> {
        Ok(Self {
            files: Self::discover_files(dir)?,
        })
    }

    /// Number of journal files discovered.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Replay every parseable entry, collecting corruption records for
    /// lines that fail to parse.
    pub fn replay(&self) -> Result<(Vec<Transaction>, Vec<CorruptionRecord>), JournalError> {
        let mut entries = Vec::new();
        let mut corruptions = Vec::new();

        for path in &self.files {
            let reader = BufReader::new(File::open(path)?);
            for (idx, line) in reader.lines().enumerate() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                match serde_json::from_str::<Transaction>(&line) {
                    Ok(tx) => entries.push(tx),
                    Err(err) => {
                        warn!(
                            file = %path.display(),
                            line = idx + 1,
                            error = %err,
                            "skipping unparseable journal line"
                        );
                        corruptions.push(CorruptionRecord {
                            file: path.clone(),
                            line: idx + 1,
                            detail: err.to_string(),
                        });
                    }
                }
            }
        }

        Ok((entries, corruptions))
    }

    // ── Internal Helpers ────────────────────────────────────────────

    fn discover_files(dir: &Path) -> Result<Vec<PathBuf>, JournalError> {
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut files: Vec<(u64, PathBuf)> = fs::read_dir(dir)?
            .filter_map(|e| e.ok())
            .filter_map(|e| {
                let name = e.file_name().to_string_lossy().to_string();
                if name.starts_with("journal-") && name.ends_with(".jsonl") {
                    let idx = name
                        .trim_start_matches("journal-")
                        .trim_end_matches(".jsonl")
                        .parse::<u64>()
                        .ok()?;
                    Some((idx, e.path()))
                } else {
                    None
                }
            })
            .collect();

        files.sort_by_key(|(idx, _)| *idx);
        Ok(files.into_iter().map(|(_, p)| p).collect())
    }
}

// ── Tests ───────────────────────────────────────────────────────────
