// Shared fixtures for the data layer unit tests.

use crate::domain::sample::{
    ArrayData, RawArray, RawSample, EDGE_FEATURES, E_LEN, MASK_LEN, NODE_FEATURES, NUM_NODES,
    NUM_TARGETS, X_LEN, Y_LEN,
};

/// A full-size sample whose X and Y are filled with `marker`, so tests
/// can tell samples apart after loading. Each field uses a different
/// on-disk dtype to exercise the casts.
pub fn sample_with_marker(marker: f64) -> RawSample {
    RawSample {
        x: RawArray::new(
            [NUM_NODES, NODE_FEATURES],
            ArrayData::F64(vec![marker; X_LEN]),
        ),
        e: RawArray::new(
            [NUM_NODES, NUM_NODES, EDGE_FEATURES],
            ArrayData::F32(vec![0.5; E_LEN]),
        ),
        y: RawArray::new([NUM_TARGETS], ArrayData::I64(vec![marker as i64; Y_LEN])),
        node_mask: RawArray::new(
            [NUM_NODES],
            ArrayData::U8((0..MASK_LEN).map(|i| (i % 2) as u8).collect()),
        ),
    }
}
