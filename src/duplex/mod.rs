//! Duplex model family: architectures and runtime settings.

pub mod architectures;
pub mod settings;
