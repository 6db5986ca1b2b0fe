// src/lib.rs
//! Vimcity scene viewer
//!
//! A small 3D viewer built on wgpu and winit: a walled ground plane with random
//! columns, a camera with four control modes and an isometric projection toggle,
//! and an ImGui overlay for help and exit confirmation.

pub mod app;
pub mod config;
pub mod error;
pub mod frame;
pub mod gfx;
pub mod input;
pub mod session;
pub mod ui;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use app::VimcityApp;
pub use config::{Variant, ViewerConfig};
pub use error::ViewerError;
pub use frame::{DrawRequest, FrameDriver, LoopState};
pub use session::Session;

/// Creates a viewer with the default configuration for the given variant
pub fn default(variant: Variant) -> Result<VimcityApp, ViewerError> {
    VimcityApp::new(ViewerConfig::default().with_variant(variant))
}
