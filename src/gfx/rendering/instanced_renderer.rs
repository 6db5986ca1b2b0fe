//! Instanced drawing of unit meshes
//!
//! Every box, outline and ground plane in the draw list becomes one
//! [`InstanceData`] scaling a shared unit mesh. One draw call per batch.

use bytemuck::{Pod, Zeroable};
use cgmath::Matrix4;
use log::debug;
use wgpu::util::DeviceExt;
use wgpu::{Buffer, Device, Queue, RenderPass};

use crate::gfx::{
    geometry::GeometryData,
    scene::{Color, CubeDraw, PlaneDraw},
};

/// Instance data for a single rendered instance
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct InstanceData {
    /// Column-major model matrix
    pub transform: [[f32; 4]; 4],
    /// RGBA in 0..=1
    pub color: [f32; 4],
}

impl InstanceData {
    pub fn from_transform(transform: Matrix4<f32>, color: Color) -> Self {
        Self {
            transform: transform.into(),
            color: color.to_f32_array(),
        }
    }

    pub fn from_cube(cube: &CubeDraw) -> Self {
        Self::from_transform(cube.transform(), cube.color)
    }

    pub fn from_plane(plane: &PlaneDraw) -> Self {
        Self::from_transform(plane.transform(), plane.color)
    }

    /// Get vertex buffer layout for instance data
    pub fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceData>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                // Model matrix columns, after position(0) and normal(1)
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 3,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 8]>() as wgpu::BufferAddress,
                    shader_location: 4,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 12]>() as wgpu::BufferAddress,
                    shader_location: 5,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 16]>() as wgpu::BufferAddress,
                    shader_location: 6,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Unit mesh uploaded to the GPU
pub struct MeshBuffers {
    pub vertex_buffer: Buffer,
    pub index_buffer: Buffer,
    pub index_count: u32,
}

impl MeshBuffers {
    pub fn new(device: &Device, geometry: &GeometryData, label: &str) -> Self {
        let vertices = geometry.to_vertices();

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Vertex Buffer")),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Index Buffer")),
            contents: bytemuck::cast_slice(&geometry.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: geometry.indices.len() as u32,
        }
    }
}

/// Growable instance buffer drawn against one mesh
pub struct InstanceBatch {
    label: &'static str,
    instance_buffer: Buffer,
    capacity: u32,
    instance_count: u32,
}

impl InstanceBatch {
    pub fn new(device: &Device, label: &'static str, capacity: u32) -> Self {
        let capacity = capacity.max(1);
        Self {
            label,
            instance_buffer: Self::create_buffer(device, label, capacity),
            capacity,
            instance_count: 0,
        }
    }

    fn create_buffer(device: &Device, label: &str, capacity: u32) -> Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("{label} Instance Buffer")),
            size: capacity as u64 * std::mem::size_of::<InstanceData>() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    /// Replaces the batch contents, growing the buffer when needed
    pub fn upload(&mut self, device: &Device, queue: &Queue, instances: &[InstanceData]) {
        let needed = instances.len() as u32;
        if needed > self.capacity {
            let capacity = needed.next_power_of_two();
            debug!("Growing {} instance buffer to {}", self.label, capacity);
            self.instance_buffer = Self::create_buffer(device, self.label, capacity);
            self.capacity = capacity;
        }

        self.instance_count = needed;
        if needed > 0 {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(instances));
        }
    }

    pub fn render<'a>(&'a self, render_pass: &mut RenderPass<'a>, mesh: &'a MeshBuffers) {
        if self.instance_count == 0 {
            return;
        }

        render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        render_pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..mesh.index_count, 0, 0..self.instance_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;

    #[test]
    fn test_instance_layout_size() {
        assert_eq!(std::mem::size_of::<InstanceData>(), 80);
    }

    #[test]
    fn test_instance_from_cube() {
        let cube = CubeDraw {
            center: Vector3::new(3.0, 1.0, -4.0),
            size: Vector3::new(2.0, 2.0, 2.0),
            color: Color::MAROON,
        };
        let instance = InstanceData::from_cube(&cube);

        // Translation lives in the last column
        assert_eq!(instance.transform[3], [3.0, 1.0, -4.0, 1.0]);
        assert_eq!(instance.transform[0][0], 2.0);
        assert_eq!(instance.color, Color::MAROON.to_f32_array());
    }

    #[test]
    fn test_instance_from_plane() {
        let plane = PlaneDraw {
            center: Vector3::new(0.0, 0.0, 0.0),
            size: (32.0, 32.0),
            color: Color::LIGHT_GRAY,
        };
        let instance = InstanceData::from_plane(&plane);
        assert_eq!(instance.transform[0][0], 32.0);
        assert_eq!(instance.transform[1][1], 1.0);
        assert_eq!(instance.transform[2][2], 32.0);
    }
}
