// ============================================================
// Layer 3 — Raw Sample Domain Type
// ============================================================
// Represents one circuit record exactly as it was written to a
// chunk file by the upstream producer.
//
// Each record has four arrays:
//   X          node features        [22, 21]
//   E          edge features        [22, 22, 25]
//   Y          circuit performance  [13]
//   node_mask  node validity mask   [22]
//
// The producer may have written any of these in any numeric
// dtype (float32, float64, int64, uint8, bool, ...). The domain
// type keeps whatever was on disk; the conversion to the types
// the model consumes (f32 everywhere, bool for the mask) happens
// on read in the dataset view.
//
// Shapes are a caller contract. Nothing in this layer checks them.
//
// Reference: Rust Book §6 (Enums), §5 (Structs)
//            serde derive documentation

use serde::{Deserialize, Serialize};

/// Number of node slots per circuit graph (padded)
pub const NUM_NODES: usize = 22;

/// Feature width of each node row in X
pub const NODE_FEATURES: usize = 21;

/// Feature width of each (node, node) cell in E
pub const EDGE_FEATURES: usize = 25;

/// Number of performance targets in Y
pub const NUM_TARGETS: usize = 13;

/// Flat element counts for each field, derived from the shapes above
pub const X_LEN: usize = NUM_NODES * NODE_FEATURES;
pub const E_LEN: usize = NUM_NODES * NUM_NODES * EDGE_FEATURES;
pub const Y_LEN: usize = NUM_TARGETS;
pub const MASK_LEN: usize = NUM_NODES;

// ─── ArrayData ────────────────────────────────────────────────────────────────
/// A flat numeric buffer tagged with the dtype it was stored in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArrayData {
    F32(Vec<f32>),
    F64(Vec<f64>),
    I64(Vec<i64>),
    I32(Vec<i32>),
    U8(Vec<u8>),
    Bool(Vec<bool>),
}

impl ArrayData {
    /// Number of elements in the buffer, whatever the dtype
    pub fn len(&self) -> usize {
        match self {
            ArrayData::F32(v)  => v.len(),
            ArrayData::F64(v)  => v.len(),
            ArrayData::I64(v)  => v.len(),
            ArrayData::I32(v)  => v.len(),
            ArrayData::U8(v)   => v.len(),
            ArrayData::Bool(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short dtype name, used in log lines
    pub fn dtype(&self) -> &'static str {
        match self {
            ArrayData::F32(_)  => "float32",
            ArrayData::F64(_)  => "float64",
            ArrayData::I64(_)  => "int64",
            ArrayData::I32(_)  => "int32",
            ArrayData::U8(_)   => "uint8",
            ArrayData::Bool(_) => "bool",
        }
    }

    /// Cast every element to f32.
    /// Wider floats and integers are converted with `as`,
    /// bools become 0.0 / 1.0.
    pub fn to_f32(&self) -> Vec<f32> {
        match self {
            ArrayData::F32(v)  => v.clone(),
            ArrayData::F64(v)  => v.iter().map(|&x| x as f32).collect(),
            ArrayData::I64(v)  => v.iter().map(|&x| x as f32).collect(),
            ArrayData::I32(v)  => v.iter().map(|&x| x as f32).collect(),
            ArrayData::U8(v)   => v.iter().map(|&x| x as f32).collect(),
            ArrayData::Bool(v) => v.iter().map(|&b| if b { 1.0 } else { 0.0 }).collect(),
        }
    }

    /// Cast every element to bool: non-zero is true.
    pub fn to_bool(&self) -> Vec<bool> {
        match self {
            ArrayData::F32(v)  => v.iter().map(|&x| x != 0.0).collect(),
            ArrayData::F64(v)  => v.iter().map(|&x| x != 0.0).collect(),
            ArrayData::I64(v)  => v.iter().map(|&x| x != 0).collect(),
            ArrayData::I32(v)  => v.iter().map(|&x| x != 0).collect(),
            ArrayData::U8(v)   => v.iter().map(|&x| x != 0).collect(),
            ArrayData::Bool(v) => v.clone(),
        }
    }
}

// ─── RawArray ─────────────────────────────────────────────────────────────────
/// An n-dimensional array as stored on disk: a shape plus a
/// row-major flat buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawArray {
    /// Dimensions as recorded by the producer
    pub shape: Vec<usize>,

    /// Row-major element buffer
    pub data: ArrayData,
}

impl RawArray {
    pub fn new(shape: impl Into<Vec<usize>>, data: ArrayData) -> Self {
        Self { shape: shape.into(), data }
    }
}

// ─── RawSample ────────────────────────────────────────────────────────────────
/// One circuit record as deserialised from a chunk file.
///
/// Field names on the wire keep the upstream keys
/// (`X`, `E`, `Y`, `node_mask`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    /// Node features — expected shape [22, 21]
    #[serde(rename = "X")]
    pub x: RawArray,

    /// Edge features — expected shape [22, 22, 25]
    #[serde(rename = "E")]
    pub e: RawArray,

    /// Circuit performance targets — expected shape [13]
    #[serde(rename = "Y")]
    pub y: RawArray,

    /// Node validity mask — expected shape [22]
    pub node_mask: RawArray,
}
