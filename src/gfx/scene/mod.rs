//! # Scene Module
//!
//! The static world the camera moves through and the per-frame draw list
//! built from it.
//!
//! ## Key Components
//!
//! - [`Scene`] - ground plane, three boundary walls and random columns
//! - [`DrawList`] - primitives to draw this frame, including the player cube
//! - [`Color`] - 8-bit RGBA palette
//! - [`Vertex3D`] - GPU vertex layout
//!
//! ## Usage
//!
//! ```no_run
//! use vimcity::gfx::camera::{CameraMode, CameraPose};
//! use vimcity::gfx::scene::Scene;
//!
//! let scene = Scene::new(20);
//! let list = scene.draw_list(CameraMode::ThirdPerson, &CameraPose::default());
//! assert_eq!(list.planes.len(), 1);
//! ```

pub mod color;
pub mod draw_list;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use color::Color;
pub use draw_list::{CubeDraw, DrawList, PlaneDraw};
pub use scene::{Column, Scene, Wall};
pub use vertex::Vertex3D;
