//! WGPU-based rendering engine for the vimcity viewer
//!
//! Owns the surface, device and the two scene pipelines (filled triangles
//! and wire lines). Each frame it uploads the draw list as instance batches,
//! clears, draws the scene with depth testing and then hands the encoder to
//! an optional UI callback.

use log::{debug, info, warn};
use wgpu::TextureFormat;

use crate::error::ViewerError;
use crate::frame::DrawRequest;
use crate::gfx::{
    camera::CameraUniform,
    geometry::{generate_cube, generate_cube_edges, generate_plane},
    resources::TextureResource,
    scene::{Color, DrawList, Vertex3D},
};
use crate::wgpu_utils::UniformBuffer;

use super::instanced_renderer::{InstanceBatch, InstanceData, MeshBuffers};
use super::shaders::FLAT_INSTANCED;

/// Outlines are drawn slightly larger than their box so they win the depth test
const WIRE_INFLATE: f32 = 1.002;

/// Core rendering engine managing GPU resources and draw calls
pub struct RenderEngine {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_texture: TextureResource,
    format: TextureFormat,
    clear_color: wgpu::Color,

    camera_buffer: UniformBuffer<CameraUniform>,
    camera_bind_group: wgpu::BindGroup,
    solid_pipeline: wgpu::RenderPipeline,
    wire_pipeline: wgpu::RenderPipeline,

    cube_mesh: MeshBuffers,
    plane_mesh: MeshBuffers,
    edge_mesh: MeshBuffers,
    cube_batch: InstanceBatch,
    plane_batch: InstanceBatch,
    wire_batch: InstanceBatch,
}

impl RenderEngine {
    /// Creates a new render engine for the given window.
    ///
    /// Fails if no adapter or device is available, or if the surface reports
    /// no usable format.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
    ) -> Result<RenderEngine, ViewerError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| ViewerError::Adapter(e.to_string()))?;
        info!("Using adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("WGPU Device"),
                required_features: wgpu::Features::default(),
                required_limits: wgpu::Limits::downlevel_defaults(),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        let surface_capabilities = surface.get_capabilities(&adapter);
        let format = surface_capabilities
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_capabilities.formats.first().copied())
            .ok_or(ViewerError::NoSurfaceFormat)?;
        let alpha_mode = surface_capabilities
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_texture =
            TextureResource::create_depth_texture(&device, &config, "depth_texture");

        let camera_buffer = UniformBuffer::new_with_data(&device, &CameraUniform::default());
        let camera_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Camera Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &camera_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.binding_resource(),
            }],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Flat Instanced Shader"),
            source: wgpu::ShaderSource::Wgsl(FLAT_INSTANCED.into()),
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[&camera_layout],
            push_constant_ranges: &[],
        });

        let solid_pipeline = create_scene_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            format,
            wgpu::PrimitiveTopology::TriangleList,
            "Solid Pipeline",
        );
        let wire_pipeline = create_scene_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            format,
            wgpu::PrimitiveTopology::LineList,
            "Wire Pipeline",
        );

        let cube_mesh = MeshBuffers::new(&device, &generate_cube(), "Cube");
        let plane_mesh = MeshBuffers::new(&device, &generate_plane(), "Plane");
        let edge_mesh = MeshBuffers::new(&device, &generate_cube_edges(), "Cube Edges");

        let cube_batch = InstanceBatch::new(&device, "Cube", 64);
        let plane_batch = InstanceBatch::new(&device, "Plane", 4);
        let wire_batch = InstanceBatch::new(&device, "Wire", 64);

        debug!("Render engine ready ({}x{}, {:?})", config.width, config.height, format);

        Ok(RenderEngine {
            surface,
            device,
            queue,
            config,
            depth_texture,
            format,
            clear_color: Color::RAY_WHITE.to_wgpu(),
            camera_buffer,
            camera_bind_group,
            solid_pipeline,
            wire_pipeline,
            cube_mesh,
            plane_mesh,
            edge_mesh,
            cube_batch,
            plane_batch,
            wire_batch,
        })
    }

    /// Draws one frame: the scene first, then the UI callback on top.
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped.
    pub fn render_frame<F>(
        &mut self,
        request: &DrawRequest,
        ui_callback: Option<F>,
    ) -> Result<(), ViewerError>
    where
        F: FnOnce(&wgpu::Device, &wgpu::Queue, &mut wgpu::CommandEncoder, &wgpu::TextureView),
    {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("Surface lost or outdated, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                warn!("Timed out acquiring surface texture, skipping frame");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        self.update(request.pose.to_uniform(request.aspect()));
        self.upload_draw_list(&request.draw_list);

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_bind_group(0, &self.camera_bind_group, &[]);

            render_pass.set_pipeline(&self.solid_pipeline);
            self.plane_batch.render(&mut render_pass, &self.plane_mesh);
            self.cube_batch.render(&mut render_pass, &self.cube_mesh);

            render_pass.set_pipeline(&self.wire_pipeline);
            self.wire_batch.render(&mut render_pass, &self.edge_mesh);
        }

        if let Some(ui_callback) = ui_callback {
            ui_callback(&self.device, &self.queue, &mut encoder, &surface_texture_view);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
        Ok(())
    }

    fn upload_draw_list(&mut self, draw_list: &DrawList) {
        let planes: Vec<InstanceData> = draw_list.planes.iter().map(InstanceData::from_plane).collect();
        let cubes: Vec<InstanceData> = draw_list.cubes.iter().map(InstanceData::from_cube).collect();
        let wires: Vec<InstanceData> = draw_list
            .wires
            .iter()
            .map(|wire| {
                let mut inflated = *wire;
                inflated.size *= WIRE_INFLATE;
                InstanceData::from_cube(&inflated)
            })
            .collect();

        self.plane_batch.upload(&self.device, &self.queue, &planes);
        self.cube_batch.upload(&self.device, &self.queue, &cubes);
        self.wire_batch.upload(&self.device, &self.queue, &wires);
    }

    /// Uploads the camera matrices for the next frame
    pub fn update(&mut self, camera_uniform: CameraUniform) {
        self.camera_buffer.update_content(&self.queue, camera_uniform);
    }

    /// Resizes the surface and recreates the depth buffer.
    ///
    /// Zero-sized requests (minimised window) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_texture =
            TextureResource::create_depth_texture(&self.device, &self.config, "depth_texture");
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Used for creating compatible render targets and UI systems
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.format
    }
}

fn create_scene_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    format: TextureFormat,
    topology: wgpu::PrimitiveTopology,
    label: &str,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex3D::desc(), InstanceData::vertex_buffer_layout()],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: TextureResource::DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::LessEqual,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}
