//! Duplex architecture family.
//!
//! Four interchangeable variants satisfy the same contract: given a batch of
//! input-domain vectors and a batch of output-domain vectors, produce an
//! estimate of the outputs from the inputs and an estimate of the inputs
//! from the outputs. The dual variants own two fully independent
//! sub-networks, one per direction, with no shared parameters.

pub mod attention;
pub mod backend;
pub mod config;
pub mod feed_forward;
pub mod recurrent;

use burn::prelude::*;
use serde::{Deserialize, Serialize};

pub use attention::{AttentionStack, DualAttention};
pub use config::DuplexModelConfig;
pub use feed_forward::{DualFeedForward, FeedForward, FeedForwardStack};
pub use recurrent::{DualRecurrent, RecurrentStack};

/// Common capability of every duplex architecture.
pub trait BidirectionalModel<B: Backend> {
    /// Predict both directions from a batch of input-domain vectors
    /// (`[batch, input_size]`) and output-domain vectors
    /// (`[batch, output_size]`). Returns `(predicted_input,
    /// predicted_output)` with the same shapes.
    fn forward(&self, input: Tensor<B, 2>, output: Tensor<B, 2>) -> (Tensor<B, 2>, Tensor<B, 2>);

    /// Total trainable parameter count.
    fn num_params(&self) -> usize;
}

/// Names the four architecture families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelVariant {
    SingleFeedForward,
    DualFeedForward,
    DualRecurrent,
    DualAttention,
}

impl ModelVariant {
    /// Parse a variant from its snake_case name.
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "single_feed_forward" => Ok(ModelVariant::SingleFeedForward),
            "dual_feed_forward" => Ok(ModelVariant::DualFeedForward),
            "dual_recurrent" => Ok(ModelVariant::DualRecurrent),
            "dual_attention" => Ok(ModelVariant::DualAttention),
            _ => Err(format!("Unknown model variant: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelVariant::SingleFeedForward => "single_feed_forward",
            ModelVariant::DualFeedForward => "dual_feed_forward",
            ModelVariant::DualRecurrent => "dual_recurrent",
            ModelVariant::DualAttention => "dual_attention",
        }
    }
}

/// A constructed duplex model, dispatching to one of the four variants.
#[derive(Debug)]
pub enum DuplexModel<B: Backend> {
    SingleFeedForward(FeedForward<B>),
    DualFeedForward(DualFeedForward<B>),
    DualRecurrent(DualRecurrent<B>),
    DualAttention(DualAttention<B>),
}

impl<B: Backend> DuplexModel<B> {
    /// Build the requested variant. Parameters are randomly initialized by
    /// Burn on the given device.
    pub fn new(variant: ModelVariant, config: &DuplexModelConfig, device: &B::Device) -> Self {
        match variant {
            ModelVariant::SingleFeedForward => {
                DuplexModel::SingleFeedForward(FeedForward::new(config, device))
            }
            ModelVariant::DualFeedForward => {
                DuplexModel::DualFeedForward(DualFeedForward::new(config, device))
            }
            ModelVariant::DualRecurrent => {
                DuplexModel::DualRecurrent(DualRecurrent::new(config, device))
            }
            ModelVariant::DualAttention => {
                DuplexModel::DualAttention(DualAttention::new(config, device))
            }
        }
    }

    /// Which architecture family this model belongs to.
    pub fn variant(&self) -> ModelVariant {
        match self {
            DuplexModel::SingleFeedForward(_) => ModelVariant::SingleFeedForward,
            DuplexModel::DualFeedForward(_) => ModelVariant::DualFeedForward,
            DuplexModel::DualRecurrent(_) => ModelVariant::DualRecurrent,
            DuplexModel::DualAttention(_) => ModelVariant::DualAttention,
        }
    }
}

impl<B: Backend> BidirectionalModel<B> for DuplexModel<B> {
    fn forward(&self, input: Tensor<B, 2>, output: Tensor<B, 2>) -> (Tensor<B, 2>, Tensor<B, 2>) {
        match self {
            DuplexModel::SingleFeedForward(m) => m.forward(input, output),
            DuplexModel::DualFeedForward(m) => m.forward(input, output),
            DuplexModel::DualRecurrent(m) => m.forward(input, output),
            DuplexModel::DualAttention(m) => m.forward(input, output),
        }
    }

    fn num_params(&self) -> usize {
        match self {
            DuplexModel::SingleFeedForward(m) => BidirectionalModel::num_params(m),
            DuplexModel::DualFeedForward(m) => BidirectionalModel::num_params(m),
            DuplexModel::DualRecurrent(m) => BidirectionalModel::num_params(m),
            DuplexModel::DualAttention(m) => BidirectionalModel::num_params(m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_from_str() {
        assert_eq!(
            ModelVariant::from_str("dual_feed_forward").unwrap(),
            ModelVariant::DualFeedForward
        );
        assert_eq!(
            ModelVariant::from_str("DUAL_ATTENTION").unwrap(),
            ModelVariant::DualAttention
        );
        assert!(ModelVariant::from_str("bilstm").is_err());
    }

    #[test]
    fn test_variant_round_trip() {
        for variant in [
            ModelVariant::SingleFeedForward,
            ModelVariant::DualFeedForward,
            ModelVariant::DualRecurrent,
            ModelVariant::DualAttention,
        ] {
            assert_eq!(ModelVariant::from_str(variant.as_str()).unwrap(), variant);
        }
    }

    #[test]
    fn test_factory_returns_requested_variant() {
        type TestBackend = burn_ndarray::NdArray<f32>;
        let device = Default::default();
        let config = DuplexModelConfig::new(4, 3, 8);

        for variant in [
            ModelVariant::SingleFeedForward,
            ModelVariant::DualFeedForward,
            ModelVariant::DualRecurrent,
            ModelVariant::DualAttention,
        ] {
            let model = DuplexModel::<TestBackend>::new(variant, &config, &device);
            assert_eq!(model.variant(), variant);
            assert!(model.num_params() > 0);
        }
    }
}
