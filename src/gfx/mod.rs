//! # Graphics Module
//!
//! Camera, scene and rendering for the viewer.
//!
//! ## Architecture Overview
//!
//! - **Camera System** ([`camera`]) - pose, four control modes, projection profiles
//! - **Geometry** ([`geometry`]) - unit meshes for boxes, outlines and the ground
//! - **Scene** ([`scene`]) - the static world and the per-frame draw list
//! - **Rendering Pipeline** ([`rendering`]) - instanced flat-colour drawing
//! - **Resources** ([`resources`]) - depth buffer
//!
//! ## Usage
//!
//! ```no_run
//! use vimcity::gfx::{camera::CameraModeState, scene::Scene};
//!
//! let state = CameraModeState::default();
//! let scene = Scene::new(20);
//! let list = scene.draw_list(state.mode, &state.pose);
//! // render_engine.render_frame(&list, None::<fn(&_, &_, &mut _, &_)>)?;
//! ```

pub mod camera;
pub mod geometry;
pub mod rendering;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use camera::{CameraMode, CameraModeState, CameraPose};
pub use rendering::render_engine::RenderEngine;
pub use scene::{DrawList, Scene};
