//! Attention-based duplex architecture.

use burn::module::Module;
use burn::nn::transformer::{TransformerEncoder, TransformerEncoderConfig, TransformerEncoderInput};
use burn::nn::{Linear, LinearConfig};
use burn::prelude::*;

use super::{BidirectionalModel, DuplexModelConfig};

/// One direction of the attention mapping: an optional residual learned
/// positional embedding, a projection into the hidden width, `num_layers`
/// self-attention encoder blocks, and a projection back out.
///
/// The positional-embedding linear is constructed whether or not it is used;
/// `use_pos_emb` only gates the residual addition in the forward pass.
#[derive(Module, Debug)]
pub struct AttentionStack<B: Backend> {
    pub pos_emb: Linear<B>,
    pub proj_in: Linear<B>,
    pub encoder: TransformerEncoder<B>,
    pub proj_out: Linear<B>,
    pub use_pos_emb: bool,
}

impl<B: Backend> AttentionStack<B> {
    pub fn new(
        d_input: usize,
        d_output: usize,
        d_hidden: usize,
        num_layers: usize,
        num_attn_heads: usize,
        use_pos_emb: bool,
        device: &B::Device,
    ) -> Self {
        // Feed-forward width follows the usual 4x convention.
        let encoder =
            TransformerEncoderConfig::new(d_hidden, 4 * d_hidden, num_attn_heads, num_layers)
                .init(device);
        Self {
            pos_emb: LinearConfig::new(d_input, d_input).init(device),
            proj_in: LinearConfig::new(d_input, d_hidden).init(device),
            encoder,
            proj_out: LinearConfig::new(d_hidden, d_output).init(device),
            use_pos_emb,
        }
    }

    /// Map `[batch, d_input]` to `[batch, d_output]`, treating the vector as
    /// a sequence of length one for the encoder.
    pub fn forward(&self, x: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = if self.use_pos_emb {
            x.clone() + self.pos_emb.forward(x)
        } else {
            x
        };
        let seq: Tensor<B, 3> = x.unsqueeze_dim(1);
        let seq = self.proj_in.forward(seq);
        let seq = self.encoder.forward(TransformerEncoderInput::new(seq));
        self.proj_out.forward(seq).squeeze::<2>(1)
    }
}

/// Dual-direction attention variant: two independent encoder stacks with no
/// weight sharing, raw projection output returned in both directions.
#[derive(Module, Debug)]
pub struct DualAttention<B: Backend> {
    pub forward_net: AttentionStack<B>,
    pub reverse_net: AttentionStack<B>,
}

impl<B: Backend> DualAttention<B> {
    pub fn new(config: &DuplexModelConfig, device: &B::Device) -> Self {
        Self {
            forward_net: AttentionStack::new(
                config.input_size,
                config.output_size,
                config.hidden_size,
                config.num_layers,
                config.num_attn_heads,
                config.use_pos_emb,
                device,
            ),
            reverse_net: AttentionStack::new(
                config.output_size,
                config.input_size,
                config.hidden_size,
                config.num_layers,
                config.num_attn_heads,
                config.use_pos_emb,
                device,
            ),
        }
    }
}

impl<B: Backend> BidirectionalModel<B> for DualAttention<B> {
    fn forward(&self, input: Tensor<B, 2>, output: Tensor<B, 2>) -> (Tensor<B, 2>, Tensor<B, 2>) {
        let predicted_output = self.forward_net.forward(input);
        let predicted_input = self.reverse_net.forward(output);
        (predicted_input, predicted_output)
    }

    fn num_params(&self) -> usize {
        Module::num_params(self)
    }
}
