// ============================================================
// Layer 2 — ExtractUseCase
// ============================================================
// Runs the extraction stage once:
//
//   Step 1: Resolve the target directory against the source dir
//   Step 2: Extract every data_chunks_<N>.zip     (Layer 4 - data)
//   Step 3: Hand the per-archive summary back to the CLI
//
// Intended to be run once per fresh download. Running it again
// re-extracts and overwrites what is already there.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::extractor::{ArchiveExtractor, ExtractionSummary};
use crate::data::loader::DEFAULT_DATA_DIR;

// ─── Extraction Configuration ────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Directory holding the data_chunks_<N>.zip archives
    pub source_dir:    PathBuf,
    /// Extraction directory; relative paths are taken from source_dir
    pub target_dir:    PathBuf,
    pub show_progress: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            source_dir:    PathBuf::from("."),
            target_dir:    PathBuf::from(DEFAULT_DATA_DIR),
            show_progress: true,
        }
    }
}

impl ExtractConfig {
    /// Target directory with relative paths anchored at source_dir
    pub fn resolved_target_dir(&self) -> PathBuf {
        if self.target_dir.is_absolute() {
            self.target_dir.clone()
        } else {
            self.source_dir.join(&self.target_dir)
        }
    }
}

// ─── ExtractUseCase ───────────────────────────────────────────────────────────
pub struct ExtractUseCase {
    config: ExtractConfig,
}

impl ExtractUseCase {
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<ExtractionSummary> {
        let cfg = &self.config;

        let extractor = ArchiveExtractor::new(
            &cfg.source_dir,
            cfg.resolved_target_dir(),
            cfg.show_progress,
        )?;
        extractor.extract_all()
    }
}
