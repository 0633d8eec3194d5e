// ============================================================
// Layer 4 — Chunk Loader
// ============================================================
// Reads every chunk file in the extraction directory and
// concatenates their samples into one CircuitDataset.
//
// Ordering:
//   Files are sorted by the FIRST run of digits in their name,
//   compared as numbers, not as text:
//
//     chunk_2, chunk_10, chunk_1  →  chunk_1, chunk_2, chunk_10
//
//   The comparison works on the digit string itself (leading
//   zeros dropped, then shorter-is-smaller, then lexicographic)
//   so there is no integer overflow for very long numbers.
//   Files with equal numbers keep their listing order.
//
// Every directory entry is treated as a chunk file. There is
// no extension filter. A name without any digit aborts the
// whole load, as does a missing directory or an unreadable
// chunk. No partial dataset is ever returned.
//
// Reference: regex crate documentation
//            Rust Book §8 (Collections), §9 (Error Handling)

use anyhow::{Context, Result};
use regex::Regex;
use std::{
    cmp::Ordering,
    fs,
    path::{Path, PathBuf},
};

use crate::data::{codec, dataset::CircuitDataset, error::DataError};
use crate::domain::{sample::RawSample, traits::SampleSource};
use crate::infra::progress;

/// Directory the loader reads when none is given
pub const DEFAULT_DATA_DIR: &str = "unzipped_data";

// ─── SequenceNumber ───────────────────────────────────────────────────────────
/// The digit run embedded in a chunk filename, ordered numerically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceNumber(String);

impl SequenceNumber {
    fn new(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        Self(if trimmed.is_empty() { "0".to_string() } else { trimmed.to_string() })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Ord for SequenceNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for SequenceNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One directory entry scheduled for loading
#[derive(Debug, Clone)]
pub struct ChunkFile {
    pub name:     String,
    pub path:     PathBuf,
    pub sequence: SequenceNumber,
}

// ─── ChunkLoader ──────────────────────────────────────────────────────────────
pub struct ChunkLoader {
    dir:           PathBuf,
    digits:        Regex,
    show_progress: bool,
}

impl ChunkLoader {
    pub fn new(dir: impl Into<PathBuf>, show_progress: bool) -> Result<Self> {
        let digits = Regex::new(r"[0-9]+").context("Invalid chunk number pattern")?;
        Ok(Self { dir: dir.into(), digits, show_progress })
    }

    /// Extract the ordering key from a chunk filename.
    pub fn sequence_number(&self, file_name: &str) -> Result<SequenceNumber, DataError> {
        self.digits
            .find(file_name)
            .map(|m| SequenceNumber::new(m.as_str()))
            .ok_or_else(|| DataError::PatternNotMatched { file: file_name.to_string() })
    }

    /// All entries of the directory, sorted by sequence number.
    pub fn chunk_files(&self) -> Result<Vec<ChunkFile>> {
        let mut files = Vec::new();

        for entry in fs::read_dir(&self.dir)
            .with_context(|| format!("Cannot read directory '{}'", self.dir.display()))?
        {
            let entry = entry?;
            let name  = entry.file_name().to_string_lossy().into_owned();
            let sequence = self.sequence_number(&name)?;

            files.push(ChunkFile { name, path: entry.path(), sequence });
        }

        // sort_by is stable, equal numbers stay in listing order
        files.sort_by(|a, b| a.sequence.cmp(&b.sequence));
        Ok(files)
    }
}

impl SampleSource for ChunkLoader {
    fn load_samples(&self) -> Result<Vec<RawSample>> {
        let files = self.chunk_files()?;
        let bar   = progress::file_bar(files.len(), "Loading chunks", self.show_progress);

        let mut samples = Vec::new();
        for file in &files {
            bar.set_message(file.name.clone());

            let chunk = codec::read_chunk(&file.path)?;
            bar.suspend(|| match chunk.first() {
                Some(s) => tracing::debug!(
                    "Loaded {} samples from '{}' (X stored as {})",
                    chunk.len(),
                    file.name,
                    s.x.data.dtype()
                ),
                None => tracing::debug!("Chunk '{}' is empty", file.name),
            });

            samples.extend(chunk);
            bar.inc(1);
        }
        bar.finish_and_clear();

        tracing::info!(
            "Loaded {} samples from {} chunk files in '{}'",
            samples.len(),
            files.len(),
            self.dir.display()
        );
        Ok(samples)
    }
}

/// Load and concatenate every chunk file under `dir` into a dataset.
pub fn load_data(dir: impl AsRef<Path>, show_progress: bool) -> Result<CircuitDataset> {
    let loader  = ChunkLoader::new(dir.as_ref(), show_progress)?;
    let dataset = CircuitDataset::new(loader.load_samples()?);

    tracing::info!("Circuit dataset is created and returned");
    Ok(dataset)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::codec::write_chunk;
    use crate::data::test_support::sample_with_marker;
    use burn::data::dataset::Dataset;

    fn loader() -> ChunkLoader {
        ChunkLoader::new(".", false).unwrap()
    }

    fn first_x(ds: &CircuitDataset) -> Vec<f32> {
        (0..ds.len()).map(|i| ds.get(i).unwrap().x[0]).collect()
    }

    #[test]
    fn test_numeric_not_lexicographic_order() {
        let dir = tempfile::tempdir().unwrap();
        write_chunk(&dir.path().join("chunk_2"), &[sample_with_marker(2.0)]).unwrap();
        write_chunk(
            &dir.path().join("chunk_10"),
            &[sample_with_marker(10.0), sample_with_marker(11.0)],
        )
        .unwrap();
        write_chunk(&dir.path().join("chunk_1"), &[sample_with_marker(1.0)]).unwrap();

        let ds = load_data(dir.path(), false).unwrap();

        // chunk_1, chunk_2, then chunk_10 with its own order kept
        assert_eq!(first_x(&ds), vec![1.0, 2.0, 10.0, 11.0]);
    }

    #[test]
    fn test_name_without_digits_fails_the_load() {
        let dir = tempfile::tempdir().unwrap();
        write_chunk(&dir.path().join("chunk_1"), &[sample_with_marker(1.0)]).unwrap();
        write_chunk(&dir.path().join("chunkfile"), &[sample_with_marker(2.0)]).unwrap();

        let err = load_data(dir.path(), false).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DataError>(),
            Some(&DataError::PatternNotMatched { file: "chunkfile".to_string() })
        );
    }

    #[test]
    fn test_empty_directory_gives_empty_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let ds  = load_data(dir.path(), false).unwrap();
        assert_eq!(ds.len(), 0);
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_data(dir.path().join("nope"), false).is_err());
    }

    #[test]
    fn test_corrupt_chunk_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_chunk(&dir.path().join("chunk_1"), &[sample_with_marker(1.0)]).unwrap();
        fs::write(dir.path().join("chunk_2"), b"\x01\x02\x03").unwrap();

        assert!(load_data(dir.path(), false).is_err());
    }

    #[test]
    fn test_only_first_digit_run_counts() {
        let l = loader();
        assert_eq!(l.sequence_number("v3_chunk_100").unwrap().as_str(), "3");
        assert_eq!(l.sequence_number("chunk_007.pt").unwrap().as_str(), "7");
        assert_eq!(l.sequence_number("chunk_000").unwrap().as_str(), "0");
    }

    #[test]
    fn test_long_numbers_compare_numerically() {
        let l     = loader();
        let big   = l.sequence_number("chunk_123456789012345678901234567890").unwrap();
        let small = l.sequence_number("chunk_99999999999999999999").unwrap();
        assert!(small < big);
        assert!(l.sequence_number("chunk_9").unwrap() < l.sequence_number("chunk_10").unwrap());
    }
}
