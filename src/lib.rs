//! duplex-net: bidirectional neural mappings between paired vector domains.
//!
//! Every architecture in this crate learns a forward mapping (input domain to
//! output domain) and, for the dual variants, an independent reverse mapping
//! with its own parameters. All tensor math, initialization, and autodiff are
//! delegated to the Burn framework; this crate is model-definition glue only.

pub mod duplex;

pub use duplex::architectures::{
    BidirectionalModel, DuplexModel, DuplexModelConfig, ModelVariant,
};
pub use duplex::settings::{settings, Settings};
