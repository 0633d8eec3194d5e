// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from the upstream zip shards to tensor batches.
//
// The pipeline flows in this order:
//
//   data_chunks_<N>.zip
//       │
//       ▼
//   ArchiveExtractor  → unpacks archives into unzipped_data/
//       │
//       ▼
//   ChunkLoader       → orders chunk files numerically, decodes them
//       │
//       ▼
//   CircuitDataset    → implements Burn's Dataset trait
//       │
//       ▼
//   CircuitBatcher    → stacks samples into tensor batches
//       │
//       ▼
//   DataLoader        → feeds batches downstream
//
// The two halves (extract, load) share nothing but the
// filesystem and can run in separate processes.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

/// Unpacks data_chunks_<N>.zip archives with progress reporting
pub mod extractor;

/// Reads and writes the bincode chunk file format
pub mod codec;

/// Orders chunk files numerically and concatenates their samples
pub mod loader;

/// Implements Burn's Dataset trait for circuit samples
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;

/// Typed failures of the data pipeline
pub mod error;

#[cfg(test)]
pub(crate) mod test_support;
