use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every failure here is fatal for the run: the caller logs it and exits.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to load kernel source {path}: {source}")]
    KernelSource { path: PathBuf, source: io::Error },

    #[error("no compatible gpu adapter found")]
    NoAdapter,

    #[error("failed to acquire gpu device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("gpu buffer readback failed: {0}")]
    Readback(#[from] wgpu::BufferAsyncError),

    #[error("gpu device disconnected before readback completed")]
    DeviceLost,

    #[error("invalid ppm data: {0}")]
    Ppm(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}
