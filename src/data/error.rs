// ============================================================
// Layer 4 — Data Errors
// ============================================================
// Failures that belong to the data pipeline itself, as opposed
// to plain I/O errors (those travel as anyhow errors with
// context attached).
//
// These are wrapped into anyhow::Error at the call site, so
// callers that care can still match on them:
//
//   if let Some(DataError::PatternNotMatched { file }) = err.downcast_ref() { ... }
//
// Reference: thiserror crate documentation

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    /// A chunk filename has no run of digits to order it by
    #[error("pattern not matched: chunk file '{file}' has no numeric component")]
    PatternNotMatched { file: String },

    /// Dataset access outside [0, len)
    #[error("index {index} is out of range for dataset of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// An archive member whose stored path would land outside the target directory
    #[error("archive member '{member}' has an unsafe path")]
    UnsafeMemberPath { member: String },
}
