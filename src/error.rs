//! Error types for window, surface and GPU setup
//!
//! Camera and input transitions cannot fail. The only failures in the viewer
//! come from the platform: creating the event loop or window, or acquiring a
//! GPU adapter, device or surface. None of them are recoverable.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("failed to create or run the event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create the window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create a rendering surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter: {0}")]
    Adapter(String),

    #[error("failed to request a GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface texture unavailable: {0}")]
    Surface(#[from] wgpu::SurfaceError),

    #[error("surface reports no supported texture formats")]
    NoSurfaceFormat,
}
