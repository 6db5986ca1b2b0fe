// src/gfx/rendering/mod.rs
//! Core rendering functionality
//!
//! Handles render pipelines, instance buffers and frame rendering.

pub mod instanced_renderer;
pub mod render_engine;
pub mod shaders;

// Re-export main types
pub use instanced_renderer::{InstanceBatch, InstanceData, MeshBuffers};
pub use render_engine::RenderEngine;
