//! Feed-forward duplex architectures.
//!
//! Both variants share the same per-direction stack: linear, leaky-ReLU,
//! dropout, linear, sigmoid. The single-direction variant only learns the
//! input-to-output mapping and returns the supplied input unchanged as its
//! "predicted input"; the dual variant owns two fully independent stacks and
//! rescales the sigmoid output from (0, 1) to (-0.5, 1.5).

use burn::module::Module;
use burn::nn::{Dropout, DropoutConfig, Linear, LinearConfig};
use burn::prelude::*;
use burn::tensor::activation;

use super::{BidirectionalModel, DuplexModelConfig};

/// One direction of a feed-forward mapping: linear -> leaky-ReLU -> dropout
/// -> linear -> sigmoid.
#[derive(Module, Debug)]
pub struct FeedForwardStack<B: Backend> {
    pub linear1: Linear<B>,
    pub dropout: Dropout,
    pub linear2: Linear<B>,
}

impl<B: Backend> FeedForwardStack<B> {
    pub fn new(
        d_input: usize,
        d_output: usize,
        d_hidden: usize,
        dropout_prob: f64,
        device: &B::Device,
    ) -> Self {
        Self {
            linear1: LinearConfig::new(d_input, d_hidden).init(device),
            dropout: DropoutConfig::new(dropout_prob).init(),
            linear2: LinearConfig::new(d_hidden, d_output).init(device),
        }
    }

    /// Map `[batch, d_input]` to `[batch, d_output]`, squashed into (0, 1).
    pub fn forward(&self, x: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = self.linear1.forward(x);
        let x = activation::leaky_relu(x, 0.01);
        let x = self.dropout.forward(x);
        activation::sigmoid(self.linear2.forward(x))
    }
}

/// Single-direction feed-forward variant.
///
/// Learns input -> output only. The predicted input is an identity
/// passthrough of the supplied input, not a learned reverse mapping.
#[derive(Module, Debug)]
pub struct FeedForward<B: Backend> {
    pub stack: FeedForwardStack<B>,
}

impl<B: Backend> FeedForward<B> {
    pub fn new(config: &DuplexModelConfig, device: &B::Device) -> Self {
        Self {
            stack: FeedForwardStack::new(
                config.input_size,
                config.output_size,
                config.hidden_size,
                config.dropout_prob(),
                device,
            ),
        }
    }
}

impl<B: Backend> BidirectionalModel<B> for FeedForward<B> {
    fn forward(&self, input: Tensor<B, 2>, _output: Tensor<B, 2>) -> (Tensor<B, 2>, Tensor<B, 2>) {
        let predicted_output = self.stack.forward(input.clone());
        (input, predicted_output)
    }

    fn num_params(&self) -> usize {
        Module::num_params(self)
    }
}

/// Dual-direction feed-forward variant.
///
/// Two independent stacks, one per direction, with no shared parameters.
/// Each sigmoid output is rescaled as `2y - 0.5`, widening the range to
/// (-0.5, 1.5).
#[derive(Module, Debug)]
pub struct DualFeedForward<B: Backend> {
    pub forward_net: FeedForwardStack<B>,
    pub reverse_net: FeedForwardStack<B>,
}

impl<B: Backend> DualFeedForward<B> {
    pub fn new(config: &DuplexModelConfig, device: &B::Device) -> Self {
        Self {
            forward_net: FeedForwardStack::new(
                config.input_size,
                config.output_size,
                config.hidden_size,
                config.dropout_prob(),
                device,
            ),
            reverse_net: FeedForwardStack::new(
                config.output_size,
                config.input_size,
                config.hidden_size,
                config.dropout_prob(),
                device,
            ),
        }
    }

    fn rescale(y: Tensor<B, 2>) -> Tensor<B, 2> {
        y.mul_scalar(2.0).sub_scalar(0.5)
    }
}

impl<B: Backend> BidirectionalModel<B> for DualFeedForward<B> {
    fn forward(&self, input: Tensor<B, 2>, output: Tensor<B, 2>) -> (Tensor<B, 2>, Tensor<B, 2>) {
        let predicted_output = Self::rescale(self.forward_net.forward(input));
        let predicted_input = Self::rescale(self.reverse_net.forward(output));
        (predicted_input, predicted_output)
    }

    fn num_params(&self) -> usize {
        Module::num_params(self)
    }
}
