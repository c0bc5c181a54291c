//! Configuration shared by all duplex architectures.

use burn::prelude::*;

/// Dropout probability used by the feed-forward variants when Monte-Carlo
/// dropout is enabled.
pub const MC_DROPOUT_PROB: f64 = 0.1;

/// Construction-time configuration for a duplex model.
///
/// `input_size`, `output_size`, and `hidden_size` are shared by every
/// variant; the remaining options only affect the variants that read them
/// (`mc_dropout` the feed-forward variants, `num_layers` the recurrent and
/// attention variants, `num_attn_heads` and `use_pos_emb` the attention
/// variant). No validation is performed here: inconsistent sizes surface as
/// panics inside Burn at the first offending tensor operation.
#[derive(Config, Debug)]
pub struct DuplexModelConfig {
    /// Width of the input domain.
    pub input_size: usize,

    /// Width of the output domain.
    pub output_size: usize,

    /// Width of internal representations.
    pub hidden_size: usize,

    /// Enable Monte-Carlo dropout (probability 0.1) inside the feed-forward
    /// variants for approximate-Bayesian uncertainty estimation. Dropout is
    /// only active on autodiff (training) backends.
    #[config(default = "false")]
    pub mc_dropout: bool,

    /// Depth of the recurrent / attention stacks.
    #[config(default = "1")]
    pub num_layers: usize,

    /// Attention head count. Must divide `hidden_size` evenly.
    #[config(default = "4")]
    pub num_attn_heads: usize,

    /// Add a learned positional embedding residually to each direction's
    /// input before the attention stack.
    #[config(default = "true")]
    pub use_pos_emb: bool,
}

impl DuplexModelConfig {
    /// Dropout probability implied by the `mc_dropout` flag.
    pub fn dropout_prob(&self) -> f64 {
        if self.mc_dropout {
            MC_DROPOUT_PROB
        } else {
            0.0
        }
    }
}
