//! Backend type aliases and runtime backend selection.

use burn::prelude::Backend;
use burn_autodiff::Autodiff as AutodiffWrapper;
use burn_ndarray::NdArray;

#[cfg(feature = "wgpu")]
use burn_wgpu::Wgpu;

#[cfg(feature = "cuda")]
use burn_cuda::Cuda;

use crate::duplex::settings::{settings, Settings};

/// Backend type aliases for different compute devices
pub type CpuBackend = NdArray<f32>;
#[cfg(feature = "wgpu")]
pub type WgpuBackend = Wgpu<f32, i32>;
#[cfg(feature = "cuda")]
pub type CudaBackend = Cuda<f32, i32>;

/// Training backends with autodiff support. Dropout is only active on these.
pub type CpuAutodiffBackend = AutodiffWrapper<CpuBackend>;
#[cfg(feature = "wgpu")]
pub type WgpuAutodiffBackend = AutodiffWrapper<WgpuBackend>;
#[cfg(feature = "cuda")]
pub type CudaAutodiffBackend = AutodiffWrapper<CudaBackend>;

/// Supported backend types for runtime selection
#[derive(Debug, Clone, Default)]
pub enum BackendType {
    #[default]
    Cpu,
    #[cfg(feature = "wgpu")]
    Wgpu,
    #[cfg(feature = "cuda")]
    Cuda,
}

impl BackendType {
    /// Pick the most capable backend compiled into this build.
    #[allow(unreachable_code)]
    pub fn best_available() -> Self {
        #[cfg(feature = "cuda")]
        {
            return BackendType::Cuda;
        }
        #[cfg(feature = "wgpu")]
        {
            return BackendType::Wgpu;
        }
        BackendType::Cpu
    }
}

/// Apply the initialization seed from the given settings, if one is set, to
/// the backend's RNG. Construction after this call is reproducible.
pub fn apply_seed<B: Backend>(settings: &Settings) {
    if let Some(seed) = settings.model.init_seed {
        B::seed(seed);
    }
}

/// Apply the globally configured initialization seed.
pub fn apply_configured_seed<B: Backend>() {
    apply_seed::<B>(settings());
}
