// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns used by more than one pipeline stage:
//
//   progress.rs — indicatif bar construction
//                 Byte-level bars for archive extraction and
//                 file-count bars for the overall extraction
//                 run and for chunk loading.
//
// Reference: Rust Book §7 (Modules)

/// Progress bar construction shared by extractor and loader
pub mod progress;
