//! Recurrent (LSTM) duplex architecture.

use burn::module::Module;
use burn::nn::{Linear, LinearConfig, Lstm, LstmConfig};
use burn::prelude::*;

use super::{BidirectionalModel, DuplexModelConfig};

/// One direction of the recurrent mapping: `num_layers` stacked LSTM layers
/// followed by a linear projection from the hidden width to the target
/// width. Burn's `Lstm` carries no output projection, so the projection is
/// an explicit layer here.
#[derive(Module, Debug)]
pub struct RecurrentStack<B: Backend> {
    pub layers: Vec<Lstm<B>>,
    pub proj: Linear<B>,
}

impl<B: Backend> RecurrentStack<B> {
    pub fn new(
        d_input: usize,
        d_output: usize,
        d_hidden: usize,
        num_layers: usize,
        device: &B::Device,
    ) -> Self {
        let mut layers = Vec::with_capacity(num_layers);
        for i in 0..num_layers {
            let d_in = if i == 0 { d_input } else { d_hidden };
            layers.push(LstmConfig::new(d_in, d_hidden, true).init(device));
        }
        Self {
            layers,
            proj: LinearConfig::new(d_hidden, d_output).init(device),
        }
    }

    /// Map `[batch, d_input]` to `[batch, d_output]`. The vector is treated
    /// as a sequence of length one; each layer's hidden-state sequence feeds
    /// the next, starting from a zeroed state.
    pub fn forward(&self, x: Tensor<B, 2>) -> Tensor<B, 2> {
        let mut seq: Tensor<B, 3> = x.unsqueeze_dim(1);
        for layer in &self.layers {
            let (hidden, _state) = layer.forward(seq, None);
            seq = hidden;
        }
        self.proj.forward(seq).squeeze::<2>(1)
    }
}

/// Dual-direction recurrent variant: two independent LSTM stacks with no
/// weight sharing, raw projection output returned in both directions.
#[derive(Module, Debug)]
pub struct DualRecurrent<B: Backend> {
    pub forward_net: RecurrentStack<B>,
    pub reverse_net: RecurrentStack<B>,
}

impl<B: Backend> DualRecurrent<B> {
    pub fn new(config: &DuplexModelConfig, device: &B::Device) -> Self {
        Self {
            forward_net: RecurrentStack::new(
                config.input_size,
                config.output_size,
                config.hidden_size,
                config.num_layers,
                device,
            ),
            reverse_net: RecurrentStack::new(
                config.output_size,
                config.input_size,
                config.hidden_size,
                config.num_layers,
                device,
            ),
        }
    }
}

impl<B: Backend> BidirectionalModel<B> for DualRecurrent<B> {
    fn forward(&self, input: Tensor<B, 2>, output: Tensor<B, 2>) -> (Tensor<B, 2>, Tensor<B, 2>) {
        let predicted_output = self.forward_net.forward(input);
        let predicted_input = self.reverse_net.forward(output);
        (predicted_input, predicted_output)
    }

    fn num_params(&self) -> usize {
        Module::num_params(self)
    }
}
