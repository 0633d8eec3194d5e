// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Wires configuration to the data layer for each pipeline stage.
//
// Rules for this layer:
//   - No archive or chunk format details here (that's Layer 4)
//   - No printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The archive extraction stage
pub mod extract_use_case;

// The chunk loading stage
pub mod load_use_case;
