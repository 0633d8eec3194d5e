// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `extract` and `load`, and their
// flags. Every flag has a default, so the bare binary behaves
// like the original one-shot extraction script.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::{
    extract_use_case::ExtractConfig,
    load_use_case::LoadConfig,
};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract every data_chunks_<N>.zip into the target directory (default)
    Extract(ExtractArgs),

    /// Load extracted chunk files and batch them once
    Load(LoadArgs),
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Directory containing the data_chunks_<N>.zip archives
    #[arg(long, default_value = ".")]
    pub source_dir: PathBuf,

    /// Extraction directory, relative to --source-dir unless absolute
    #[arg(long, default_value = "unzipped_data")]
    pub target_dir: PathBuf,
}

impl ExtractArgs {
    pub fn into_config(self, show_progress: bool) -> ExtractConfig {
        ExtractConfig {
            source_dir: self.source_dir,
            target_dir: self.target_dir,
            show_progress,
        }
    }
}

#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Directory of extracted chunk files
    #[arg(long, default_value = "unzipped_data")]
    pub data_dir: PathBuf,

    /// Samples per batch
    #[arg(long, default_value_t = 32, value_parser = parse_batch_size)]
    pub batch_size: usize,

    /// Shuffle samples with this seed before batching
    #[arg(long)]
    pub shuffle: Option<u64>,
}

fn parse_batch_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0)  => Err("batch size must be at least 1".to_string()),
        Ok(n)  => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

impl LoadArgs {
    pub fn into_config(self, show_progress: bool) -> LoadConfig {
        LoadConfig {
            data_dir:     self.data_dir,
            batch_size:   self.batch_size,
            shuffle_seed: self.shuffle,
            show_progress,
        }
    }
}
