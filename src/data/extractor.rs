// ============================================================
// Layer 4 — Archive Extractor
// ============================================================
// Unpacks the upstream dataset shards (data_chunks_<N>.zip)
// into a target directory.
//
// Per archive:
//   1. Open it with the zip crate
//   2. Sum the uncompressed size of every member
//   3. Write each member under the target directory,
//      advancing a byte-level progress bar by its size
//
// One archive failing (corrupt, truncated, unwritable member)
// never stops the run. Its failure is captured as an
// ArchiveOutcome and the next archive is processed.
//
// Archives are processed in directory listing order. They are
// independent, so the order only affects log ordering.
//
// Source archives are left in place. Re-running overwrites the
// files already extracted.
//
// Reference: zip crate documentation (ZipArchive, enclosed_name)
//            Rust Book §9 (Recoverable Errors with Result)

use anyhow::{Context, Result};
use indicatif::{MultiProgress, ProgressBar};
use regex::Regex;
use std::{
    fs::{self, File},
    io,
    path::{Path, PathBuf},
};

use crate::data::error::DataError;
use crate::infra::progress;

/// Archive filenames the extractor picks up
pub const ARCHIVE_PATTERN: &str = r"^data_chunks_\d+\.zip$";

// ─── ArchiveOutcome ───────────────────────────────────────────────────────────
/// What happened to one archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveOutcome {
    /// Archive file name (not the full path)
    pub archive: String,

    /// Uncompressed bytes written on success, failure text otherwise
    pub result: std::result::Result<u64, String>,
}

impl ArchiveOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

// ─── ExtractionSummary ────────────────────────────────────────────────────────
/// Tally of one extract_all run.
#[derive(Debug, Clone, Default)]
pub struct ExtractionSummary {
    /// Resolved directory the archives were extracted into
    pub target_dir: PathBuf,

    /// One entry per matching archive, in processing order
    pub outcomes: Vec<ArchiveOutcome>,
}

impl ExtractionSummary {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn failures(&self) -> impl Iterator<Item = &ArchiveOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }
}

// ─── ArchiveExtractor ─────────────────────────────────────────────────────────
pub struct ArchiveExtractor {
    /// Directory scanned for data_chunks_<N>.zip files
    source_dir: PathBuf,

    /// Directory the archive members are written into
    target_dir: PathBuf,

    pattern: Regex,

    /// Owns every bar drawn during a run so they stack cleanly
    progress: MultiProgress,

    show_progress: bool,
}

impl ArchiveExtractor {
    pub fn new(
        source_dir:    impl Into<PathBuf>,
        target_dir:    impl Into<PathBuf>,
        show_progress: bool,
    ) -> Result<Self> {
        let pattern = Regex::new(ARCHIVE_PATTERN)
            .context("Invalid archive filename pattern")?;

        Ok(Self {
            source_dir: source_dir.into(),
            target_dir: target_dir.into(),
            pattern,
            progress: progress::multi(show_progress),
            show_progress,
        })
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// True if `file_name` names an archive this extractor handles
    pub fn matches(&self, file_name: &str) -> bool {
        self.pattern.is_match(file_name)
    }

    /// Extract every matching archive in the source directory.
    ///
    /// Only setup problems are returned as errors: the target
    /// directory cannot be created or the source directory cannot
    /// be listed. Per-archive failures end up in the summary.
    pub fn extract_all(&self) -> Result<ExtractionSummary> {
        tracing::info!("Starting data chunk extraction of data_chunks_*.zip files...");

        // Idempotent: an existing directory is fine
        fs::create_dir_all(&self.target_dir).with_context(|| {
            format!("Cannot create extraction directory '{}'", self.target_dir.display())
        })?;
        tracing::info!("Extraction directory: {}", self.target_dir.display());

        let archives = self.list_archives()?;

        let mut summary = ExtractionSummary {
            target_dir: self.target_dir.clone(),
            outcomes:   Vec::with_capacity(archives.len()),
        };

        if archives.is_empty() {
            tracing::info!("No data_chunks_*.zip files found");
            return Ok(summary);
        }

        let overall = self.progress.add(progress::file_bar(
            archives.len(),
            "Overall progress",
            self.show_progress,
        ));

        for path in &archives {
            summary.outcomes.push(self.extract_one(path));
            overall.inc(1);
        }
        overall.finish_and_clear();

        tracing::info!(
            "Extraction complete: {}/{} files processed",
            summary.succeeded(),
            summary.total()
        );
        Ok(summary)
    }

    /// Extract a single archive into the target directory.
    ///
    /// Never returns an error: any failure is logged with the
    /// archive name and recorded in the outcome.
    pub fn extract_one(&self, archive_path: &Path) -> ArchiveOutcome {
        let archive = archive_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| archive_path.display().to_string());

        match self.unpack(archive_path, &archive) {
            Ok(bytes) => {
                self.progress.suspend(|| {
                    tracing::info!(
                        "Extracted {} ({} bytes), source archive kept",
                        archive,
                        bytes
                    )
                });
                ArchiveOutcome { archive, result: Ok(bytes) }
            }
            Err(e) => {
                let reason = format!("{e:#}");
                self.progress.suspend(|| {
                    tracing::warn!("Failed to extract {}: {}", archive, reason)
                });
                ArchiveOutcome { archive, result: Err(reason) }
            }
        }
    }

    /// Matching archive paths in listing order.
    fn list_archives(&self) -> Result<Vec<PathBuf>> {
        let mut archives = Vec::new();

        for entry in fs::read_dir(&self.source_dir).with_context(|| {
            format!("Cannot read directory '{}'", self.source_dir.display())
        })? {
            let entry = entry?;
            let name  = entry.file_name();

            // Non UTF-8 names can't match the pattern anyway
            if let Some(name) = name.to_str() {
                if self.matches(name) {
                    archives.push(entry.path());
                }
            }
        }

        Ok(archives)
    }

    /// Do the actual work for extract_one, returning total bytes written.
    fn unpack(&self, archive_path: &Path, archive: &str) -> Result<u64> {
        let file = File::open(archive_path)
            .with_context(|| format!("Cannot open '{}'", archive_path.display()))?;
        let mut reader = zip::ZipArchive::new(file).context("Not a readable zip archive")?;

        // First pass: total uncompressed size for the progress bar
        let mut total_size = 0u64;
        for i in 0..reader.len() {
            total_size += reader
                .by_index(i)
                .with_context(|| format!("Cannot read archive entry {i}"))?
                .size();
        }

        let bar = self.progress.add(progress::byte_bar(
            total_size,
            format!("Extracting {archive}"),
            self.show_progress,
        ));

        progress::close(&bar, self.write_members(&mut reader, &bar))?;
        Ok(total_size)
    }

    /// Write every member under the target directory, advancing `bar`.
    fn write_members(&self, reader: &mut zip::ZipArchive<File>, bar: &ProgressBar) -> Result<()> {
        for i in 0..reader.len() {
            let mut member = reader
                .by_index(i)
                .with_context(|| format!("Cannot read archive entry {i}"))?;

            let out_path = match member.enclosed_name() {
                Some(rel) => self.target_dir.join(rel),
                None => {
                    return Err(DataError::UnsafeMemberPath {
                        member: member.name().to_string(),
                    }
                    .into());
                }
            };

            if member.is_dir() {
                fs::create_dir_all(&out_path).with_context(|| {
                    format!("Cannot create directory '{}'", out_path.display())
                })?;
            } else {
                if let Some(parent) = out_path.parent() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Cannot create directory '{}'", parent.display())
                    })?;
                }
                let mut out = File::create(&out_path)
                    .with_context(|| format!("Cannot create '{}'", out_path.display()))?;
                io::copy(&mut member, &mut out)
                    .with_context(|| format!("Cannot extract '{}'", member.name()))?;
            }

            bar.inc(member.size());
        }

        Ok(())
    }
}
