// ============================================================
// Layer 4 — Chunk File Codec
// ============================================================
// A chunk file is a bincode encoding of Vec<RawSample>.
//
// Layout (bincode 1.x, little endian, fixed-width lengths):
//   u64                 number of samples
//   RawSample × n       X, E, Y, node_mask in that order
//     RawArray          shape (u64 len + u64 dims) then
//                       ArrayData (u32 variant tag + u64 len + elements)
//
// There is no header or version field. Reading a file written
// by anything else fails at deserialisation, which the loader
// treats as fatal. So does any byte left over after the last
// sample.
//
// Reference: bincode crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use bincode::Options;
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use crate::domain::sample::RawSample;

// Fixed-width little endian, no size limit, nothing after the payload
fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .reject_trailing_bytes()
}

/// Deserialise every sample stored in one chunk file.
pub fn read_chunk(path: &Path) -> Result<Vec<RawSample>> {
    let bytes = fs::read(path)
        .with_context(|| format!("Cannot open chunk file '{}'", path.display()))?;

    let samples: Vec<RawSample> = options()
        .deserialize(&bytes)
        .with_context(|| format!("Cannot deserialise chunk file '{}'", path.display()))?;

    Ok(samples)
}

/// Serialise samples into a chunk file, replacing it if present.
pub fn write_chunk(path: &Path, samples: &[RawSample]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Cannot create chunk file '{}'", path.display()))?;

    let mut writer = BufWriter::new(file);
    options()
        .serialize_into(&mut writer, samples)
        .with_context(|| format!("Cannot serialise chunk file '{}'", path.display()))?;
    writer.flush()?;

    tracing::debug!("Wrote {} samples to '{}'", samples.len(), path.display());
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_support::sample_with_marker;

    #[test]
    fn test_written_chunk_reads_back_in_order() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("chunk_0");

        let samples = vec![sample_with_marker(1.0), sample_with_marker(2.0)];
        write_chunk(&path, &samples).unwrap();

        assert_eq!(read_chunk(&path).unwrap(), samples);
    }

    #[test]
    fn test_garbage_file_fails_to_deserialise() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("chunk_9");
        std::fs::write(&path, b"definitely not bincode").unwrap();

        let err = read_chunk(&path).unwrap_err();
        assert!(err.to_string().contains("Cannot deserialise"));
    }

    #[test]
    fn test_trailing_bytes_are_fatal() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("chunk_3");
        write_chunk(&path, &[sample_with_marker(3.0)]).unwrap();

        let mut bytes = std::fs::read(&path).unwrap();
        bytes.extend_from_slice(b"GARBAGE GARBAGE");
        std::fs::write(&path, bytes).unwrap();

        let err = read_chunk(&path).unwrap_err();
        assert!(err.to_string().contains("Cannot deserialise"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_chunk(&dir.path().join("chunk_404")).is_err());
    }
}
