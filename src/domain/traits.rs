// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer only talks to the data layer through
// these traits, so a different on-disk source (a single large
// file, an object store, ...) can be dropped in later.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use crate::domain::sample::RawSample;

// ─── SampleSource ─────────────────────────────────────────────────────────────
/// Any component that can produce the full, ordered list of raw
/// circuit samples.
///
/// Implementations:
///   - ChunkLoader → reads numbered chunk files from a directory
pub trait SampleSource {
    /// Load every sample, in the order the source defines.
    /// Any failure is fatal: no partial result is returned.
    fn load_samples(&self) -> Result<Vec<RawSample>>;
}
