use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

use crate::data::error::DataError;
use crate::domain::sample::RawSample;

/// One circuit sample in the types the model consumes.
/// X, E and Y are flat row-major f32 buffers; the batcher gives
/// them their [22, 21], [22, 22, 25] and [13] shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitSample {
    pub x:         Vec<f32>,
    pub e:         Vec<f32>,
    pub y:         Vec<f32>,
    pub node_mask: Vec<bool>,
}

impl From<&RawSample> for CircuitSample {
    fn from(raw: &RawSample) -> Self {
        Self {
            x:         raw.x.data.to_f32(),
            e:         raw.e.data.to_f32(),
            y:         raw.y.data.to_f32(),
            node_mask: raw.node_mask.data.to_bool(),
        }
    }
}

/// Every loaded sample, concatenated in chunk order.
/// Immutable once built; conversion to f32/bool happens per access.
#[derive(Debug)]
pub struct CircuitDataset {
    samples: Vec<RawSample>,
}

impl CircuitDataset {
    pub fn new(samples: Vec<RawSample>) -> Self { Self { samples } }

    /// Checked access: out-of-range indices are an error rather than None.
    pub fn sample(&self, index: usize) -> Result<CircuitSample, DataError> {
        self.samples
            .get(index)
            .map(CircuitSample::from)
            .ok_or(DataError::IndexOutOfRange { index, len: self.samples.len() })
    }
}

impl Dataset<CircuitSample> for CircuitDataset {
    fn get(&self, index: usize) -> Option<CircuitSample> {
        self.samples.get(index).map(CircuitSample::from)
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_support::sample_with_marker;
    use crate::domain::sample::{E_LEN, MASK_LEN, X_LEN, Y_LEN};

    #[test]
    fn test_get_converts_native_dtypes() {
        let ds = CircuitDataset::new(vec![sample_with_marker(4.0)]);
        let s  = ds.get(0).unwrap();

        // X was stored as f64, Y as i64, mask as u8
        assert_eq!(s.x.len(), X_LEN);
        assert!(s.x.iter().all(|&v| v == 4.0));
        assert_eq!(s.e.len(), E_LEN);
        assert_eq!(s.y, vec![4.0; Y_LEN]);
        assert_eq!(s.node_mask.len(), MASK_LEN);
        assert!(!s.node_mask[0]);
        assert!(s.node_mask[1]);
    }

    #[test]
    fn test_every_index_in_range_is_readable() {
        let ds = CircuitDataset::new((0..5).map(|i| sample_with_marker(i as f64)).collect());
        for i in 0..ds.len() {
            assert_eq!(ds.sample(i).unwrap().x[0], i as f32);
        }
    }

    #[test]
    fn test_out_of_range_is_an_error() {
        let ds = CircuitDataset::new(vec![sample_with_marker(0.0)]);
        assert!(ds.get(1).is_none());
        assert_eq!(
            ds.sample(1),
            Err(DataError::IndexOutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_empty_dataset() {
        let ds = CircuitDataset::new(Vec::new());
        assert_eq!(ds.len(), 0);
        assert!(ds.is_empty());
        assert!(ds.sample(0).is_err());
    }
}
