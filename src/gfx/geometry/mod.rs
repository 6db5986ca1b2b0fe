//! # Procedural Geometry
//!
//! Unit meshes for everything the viewer draws. Each draw call scales one
//! of these by an instance transform, so no model files are loaded.
//!
//! ## Supported Primitives
//!
//! - **Cube**: unit cube centred at the origin, flat-shaded faces
//! - **Plane**: unit quad in the XZ plane facing +Y
//! - **Cube edges**: the twelve edges of the unit cube as a line list
//!
//! ## Usage
//!
//! ```rust
//! use vimcity::gfx::geometry::{generate_cube, generate_cube_edges};
//!
//! let cube = generate_cube();
//! assert_eq!(cube.triangle_count(), 12);
//!
//! let edges = generate_cube_edges();
//! assert_eq!(edges.indices.len(), 24);
//! ```

pub mod primitives;

pub use primitives::*;

use crate::gfx::scene::vertex::Vertex3D;

/// Generated mesh ready for GPU upload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryData {
    pub vertices: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    /// Triangle or line indices depending on the primitive
    pub indices: Vec<u32>,
}

impl GeometryData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Interleave positions and normals into the renderer's vertex format
    pub fn to_vertices(&self) -> Vec<Vertex3D> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, position)| Vertex3D {
                position: *position,
                normal: self.normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]),
            })
            .collect()
    }
}
