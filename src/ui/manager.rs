// src/ui/manager.rs
//! ImGui integration for the viewer overlay
//!
//! Owns the ImGui context, the winit platform glue and the wgpu renderer.
//! The overlay is drawn in its own pass on top of the scene.

use imgui::{Context, FontConfig, FontSource, MouseCursor, Style, StyleColor};
use imgui_wgpu::{Renderer, RendererConfig};
use imgui_winit_support::{HiDpiMode, WinitPlatform};
use log::error;
use std::time::Instant;
use wgpu::{CommandEncoder, Device, Queue, TextureFormat, TextureView};
use winit::{
    event::{Event, WindowEvent},
    window::Window,
};

use crate::gfx::scene::Color;

/// Matches the small bitmap font the panels were laid out for
const FONT_SIZE: f32 = 13.0;

pub struct UiManager {
    pub context: Context,
    platform: WinitPlatform,
    renderer: Renderer,
    last_frame: Instant,
    last_cursor: Option<MouseCursor>,
}

impl UiManager {
    /// Creates the ImGui context with a dark theme and a ray-white modal veil
    pub fn new(
        device: &Device,
        queue: &Queue,
        output_color_format: TextureFormat,
        window: &Window,
    ) -> Self {
        let mut context = Context::create();
        context.set_ini_filename(None);

        // Locked DPI keeps panel coordinates in physical pixels
        let mut platform = WinitPlatform::new(&mut context);
        platform.attach_window(context.io_mut(), window, HiDpiMode::Locked(1.0));

        context.fonts().add_font(&[FontSource::DefaultFontData {
            config: Some(FontConfig {
                oversample_h: 1,
                pixel_snap_h: true,
                size_pixels: FONT_SIZE,
                ..Default::default()
            }),
        }]);

        apply_overlay_style(context.style_mut());

        let renderer = Renderer::new(&mut context, device, queue, renderer_config(output_color_format));

        Self {
            context,
            platform,
            renderer,
            last_frame: Instant::now(),
            last_cursor: None,
        }
    }

    /// Forwards a window event to ImGui.
    ///
    /// Returns true if ImGui wants the mouse. Keyboard events are always
    /// shared with the viewer, since the shortcuts must keep working while a
    /// panel has focus.
    pub fn handle_input<T>(&mut self, window: &Window, event: &Event<T>) -> bool {
        match event {
            Event::WindowEvent {
                event: window_event,
                ..
            } => match window_event {
                WindowEvent::CursorMoved { .. }
                | WindowEvent::MouseInput { .. }
                | WindowEvent::MouseWheel { .. }
                | WindowEvent::KeyboardInput { .. }
                | WindowEvent::ModifiersChanged(_)
                | WindowEvent::Resized(_)
                | WindowEvent::Focused(_) => {
                    self.platform
                        .handle_event(self.context.io_mut(), window, event);
                    self.context.io().want_capture_mouse
                }
                _ => false,
            },
            _ => false,
        }
    }

    /// Starts an ImGui frame, builds it with `run_ui` and returns its result
    pub fn update_logic<F, R>(&mut self, window: &Window, run_ui: F) -> R
    where
        F: FnOnce(&imgui::Ui) -> R,
    {
        let now = Instant::now();
        self.context
            .io_mut()
            .update_delta_time(now - self.last_frame);
        self.last_frame = now;

        if let Err(e) = self.platform.prepare_frame(self.context.io_mut(), window) {
            error!("Failed to prepare ImGui frame: {}", e);
        }

        let ui = self.context.frame();
        let result = run_ui(ui);

        if self.last_cursor != ui.mouse_cursor() {
            self.last_cursor = ui.mouse_cursor();
            self.platform.prepare_render(ui, window);
        }

        result
    }

    /// Renders the frame built by the last [`update_logic`](Self::update_logic)
    /// on top of `color_attachment`, keeping the scene underneath
    pub fn render_display_only(
        &mut self,
        device: &Device,
        queue: &Queue,
        encoder: &mut CommandEncoder,
        color_attachment: &TextureView,
    ) {
        let draw_data = self.context.render();

        if draw_data.display_size[0] <= 0.0 || draw_data.display_size[1] <= 0.0 {
            return;
        }

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("imgui_render_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: color_attachment,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if let Err(e) = self.renderer.render(draw_data, queue, device, &mut render_pass) {
            error!("Failed to render ImGui: {}", e);
        }
    }

    /// Builds and renders in one go. Returns what `run_ui` returned.
    pub fn draw<F, R>(
        &mut self,
        device: &Device,
        queue: &Queue,
        encoder: &mut CommandEncoder,
        window: &Window,
        color_attachment: &TextureView,
        run_ui: F,
    ) -> R
    where
        F: FnOnce(&imgui::Ui) -> R,
    {
        let result = self.update_logic(window, run_ui);
        self.render_display_only(device, queue, encoder, color_attachment);
        result
    }
}

/// Dark widgets with square corners. Modal popups dim the scene with a
/// ray-white veil.
fn apply_overlay_style(style: &mut Style) {
    style.use_dark_colors();
    style.colors[StyleColor::ModalWindowDimBg as usize] = Color::RAY_WHITE.fade(0.8).to_f32_array();
    style.window_rounding = 0.0;
}

/// The shader has to encode to sRGB itself when the target does not.
fn renderer_config(format: TextureFormat) -> RendererConfig<'static> {
    let base = if format.is_srgb() {
        RendererConfig::new()
    } else {
        RendererConfig::new_srgb()
    };
    RendererConfig {
        texture_format: format,
        ..base
    }
}
