// src/gfx/resources/mod.rs
//! GPU resources shared by the render passes

pub mod texture_resource;

pub use texture_resource::TextureResource;
