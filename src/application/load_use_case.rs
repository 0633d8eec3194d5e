// ============================================================
// Layer 2 — LoadUseCase
// ============================================================
// Orchestrates the loading stage:
//
//   Step 1: Load and concatenate chunk files   (Layer 4 - data)
//   Step 2: Build a Burn DataLoader over the dataset
//   Step 3: Drive it once and report what came out
//
// The report is what the CLI prints. It doubles as a smoke test
// that the extracted data batches with the expected shapes.

use anyhow::Result;
use burn::{
    backend::NdArray,
    data::{dataloader::DataLoaderBuilder, dataset::Dataset},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{
    batcher::CircuitBatcher,
    loader::{load_data, DEFAULT_DATA_DIR},
};

type CpuBackend = NdArray;

// ─── Load Configuration ──────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub data_dir:      PathBuf,
    pub batch_size:    usize,
    /// Shuffle samples with this seed; None keeps chunk order
    pub shuffle_seed:  Option<u64>,
    pub show_progress: bool,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            data_dir:      PathBuf::from(DEFAULT_DATA_DIR),
            batch_size:    32,
            shuffle_seed:  None,
            show_progress: true,
        }
    }
}

/// What one pass over the loaded dataset produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadReport {
    pub samples:          usize,
    pub batches:          usize,
    /// Dims of X, E, Y and node_mask in the first batch, if any
    pub first_batch_dims: Option<[Vec<usize>; 4]>,
}

// ─── LoadUseCase ──────────────────────────────────────────────────────────────
pub struct LoadUseCase {
    config: LoadConfig,
}

impl LoadUseCase {
    pub fn new(config: LoadConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<LoadReport> {
        let cfg = &self.config;
        anyhow::ensure!(cfg.batch_size > 0, "batch size must be at least 1");

        let dataset = load_data(&cfg.data_dir, cfg.show_progress)?;
        let samples = dataset.len();

        let batcher = CircuitBatcher::<CpuBackend>::new(Default::default());
        let mut builder = DataLoaderBuilder::new(batcher).batch_size(cfg.batch_size);
        if let Some(seed) = cfg.shuffle_seed {
            builder = builder.shuffle(seed);
        }
        let loader = builder.build(dataset);

        let mut batches          = 0usize;
        let mut first_batch_dims = None;
        for batch in loader.iter() {
            if first_batch_dims.is_none() {
                first_batch_dims = Some([
                    batch.x.dims().to_vec(),
                    batch.e.dims().to_vec(),
                    batch.y.dims().to_vec(),
                    batch.node_mask.dims().to_vec(),
                ]);
            }
            batches += 1;
        }

        tracing::info!("Iterated {} batches over {} samples", batches, samples);
        Ok(LoadReport { samples, batches, first_batch_dims })
    }
}
