// ============================================================
// Layer 4 — Circuit Batcher
// ============================================================
// Implements Burn's Batcher trait to stack Vec<CircuitSample>
// into one CircuitBatch of tensors.
//
// How batching works here:
//   Input:  N CircuitSamples, each with flat row-major buffers
//   Output: CircuitBatch with
//             x          [N, 22, 21]
//             e          [N, 22, 22, 25]
//             y          [N, 13]
//             node_mask  [N, 22]   (Bool)
//
//   Each field is flattened across samples into one Vec and
//   reshaped once.
//
// Shapes are NOT checked when samples are loaded. A malformed
// sample shows up here, as a reshape panic inside burn.
//
// Reference: Burn Book §4 (Batcher)

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

use crate::data::dataset::CircuitSample;
use crate::domain::sample::{EDGE_FEATURES, NODE_FEATURES, NUM_NODES, NUM_TARGETS};

// ─── CircuitBatch ─────────────────────────────────────────────────────────────
/// A batch of circuit samples; every tensor leads with batch_size.
#[derive(Debug, Clone)]
pub struct CircuitBatch<B: Backend> {
    /// Node features — shape: [batch_size, 22, 21]
    pub x: Tensor<B, 3>,

    /// Edge features — shape: [batch_size, 22, 22, 25]
    pub e: Tensor<B, 4>,

    /// Circuit performance targets — shape: [batch_size, 13]
    pub y: Tensor<B, 2>,

    /// Node validity — shape: [batch_size, 22]
    pub node_mask: Tensor<B, 2, Bool>,
}

// ─── CircuitBatcher ───────────────────────────────────────────────────────────
#[derive(Clone, Debug)]
pub struct CircuitBatcher<B: Backend> {
    /// The device tensors are created on
    pub device: B::Device,
}

impl<B: Backend> CircuitBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

impl<B: Backend> Batcher<CircuitSample, CircuitBatch<B>> for CircuitBatcher<B> {
    fn batch(&self, items: Vec<CircuitSample>) -> CircuitBatch<B> {
        let batch_size = items.len();

        let x_flat: Vec<f32> = items.iter().flat_map(|s| s.x.iter().copied()).collect();
        let e_flat: Vec<f32> = items.iter().flat_map(|s| s.e.iter().copied()).collect();
        let y_flat: Vec<f32> = items.iter().flat_map(|s| s.y.iter().copied()).collect();

        // Int first, then compare to get a Bool tensor
        let mask_flat: Vec<i32> = items
            .iter()
            .flat_map(|s| s.node_mask.iter().map(|&m| m as i32))
            .collect();

        let x = Tensor::<B, 1>::from_floats(x_flat.as_slice(), &self.device)
            .reshape([batch_size, NUM_NODES, NODE_FEATURES]);

        let e = Tensor::<B, 1>::from_floats(e_flat.as_slice(), &self.device)
            .reshape([batch_size, NUM_NODES, NUM_NODES, EDGE_FEATURES]);

        let y = Tensor::<B, 1>::from_floats(y_flat.as_slice(), &self.device)
            .reshape([batch_size, NUM_TARGETS]);

        let node_mask = Tensor::<B, 1, Int>::from_ints(mask_flat.as_slice(), &self.device)
            .reshape([batch_size, NUM_NODES])
            .greater_elem(0);

        CircuitBatch { x, e, y, node_mask }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;
    use burn::data::dataloader::DataLoaderBuilder;

    use crate::data::dataset::CircuitDataset;
    use crate::data::test_support::sample_with_marker;

    type TestBackend = NdArray;

    #[test]
    fn test_batch_shapes() {
        let samples: Vec<CircuitSample> = (0..3)
            .map(|i| CircuitSample::from(&sample_with_marker(i as f64)))
            .collect();

        let batch: CircuitBatch<TestBackend> =
            CircuitBatcher::new(Default::default()).batch(samples);

        assert_eq!(batch.x.dims(), [3, 22, 21]);
        assert_eq!(batch.e.dims(), [3, 22, 22, 25]);
        assert_eq!(batch.y.dims(), [3, 13]);
        assert_eq!(batch.node_mask.dims(), [3, 22]);
    }

    #[test]
    fn test_batch_keeps_sample_order_and_mask_values() {
        let samples = vec![
            CircuitSample::from(&sample_with_marker(5.0)),
            CircuitSample::from(&sample_with_marker(6.0)),
        ];

        let batch: CircuitBatch<TestBackend> =
            CircuitBatcher::new(Default::default()).batch(samples);

        let y = batch.y.into_data().to_vec::<f32>().unwrap();
        assert_eq!(y[0], 5.0);
        assert_eq!(y[13], 6.0);

        let mask = batch.node_mask.into_data().to_vec::<bool>().unwrap();
        assert_eq!(&mask[..4], &[false, true, false, true]);
    }

    #[test]
    fn test_dataloader_covers_whole_dataset() {
        let dataset = CircuitDataset::new((0..5).map(|i| sample_with_marker(i as f64)).collect());
        let batcher = CircuitBatcher::<TestBackend>::new(Default::default());

        let loader = DataLoaderBuilder::new(batcher).batch_size(2).build(dataset);

        let sizes: Vec<usize> = loader.iter().map(|b| b.x.dims()[0]).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
    }
}
