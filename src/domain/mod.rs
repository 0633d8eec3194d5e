// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types describing what a circuit sample IS on disk,
// plus the shape constants the rest of the crate relies on.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, constants and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Raw on-disk sample record and shape constants
pub mod sample;

// Core abstractions that the data layer implements
pub mod traits;
