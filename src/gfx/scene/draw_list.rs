//! Per-frame description of what to draw
//!
//! The scene produces a [`DrawList`] of plain primitives; the render engine
//! turns it into instance buffers. Nothing here touches the GPU.

use cgmath::{Matrix4, Vector3};

use super::color::Color;

/// Axis-aligned box given by its centre and edge lengths
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeDraw {
    pub center: Vector3<f32>,
    pub size: Vector3<f32>,
    pub color: Color,
}

impl CubeDraw {
    /// Transform taking the unit cube to this box
    pub fn transform(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.center)
            * Matrix4::from_nonuniform_scale(self.size.x, self.size.y, self.size.z)
    }
}

/// Horizontal rectangle lying in the XZ plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneDraw {
    pub center: Vector3<f32>,
    /// Extent along x and z
    pub size: (f32, f32),
    pub color: Color,
}

impl PlaneDraw {
    /// Transform taking the unit plane to this rectangle
    pub fn transform(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.center) * Matrix4::from_nonuniform_scale(self.size.0, 1.0, self.size.1)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub planes: Vec<PlaneDraw>,
    /// Filled boxes
    pub cubes: Vec<CubeDraw>,
    /// Box outlines
    pub wires: Vec<CubeDraw>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Transform, Point3};

    #[test]
    fn test_cube_transform_maps_unit_corner() {
        let cube = CubeDraw {
            center: Vector3::new(1.0, 3.0, -2.0),
            size: Vector3::new(2.0, 6.0, 2.0),
            color: Color::BLUE,
        };
        let corner = cube.transform().transform_point(Point3::new(0.5, 0.5, 0.5));
        assert_eq!(corner, Point3::new(2.0, 6.0, -1.0));
    }
}
