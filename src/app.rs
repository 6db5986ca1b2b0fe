//! Application shell
//!
//! Wires winit events into [`FrameInput`], paces redraws at the target frame
//! rate, and runs one [`FrameDriver::tick`] per redraw followed by the
//! scene and overlay render.

use log::{error, info, warn};
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{DeviceEvent, DeviceId, Event, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{CursorGrabMode, Window, WindowId},
};

use crate::{
    config::{Variant, ViewerConfig},
    error::ViewerError,
    frame::{FrameDriver, LoopState, WindowSignals},
    gfx::{camera::CameraController, rendering::RenderEngine, scene::Scene},
    input::FrameInput,
    session::Session,
    ui::{draw_overlay, OverlayResponse, UiManager},
};

type UiPass = fn(&wgpu::Device, &wgpu::Queue, &mut wgpu::CommandEncoder, &wgpu::TextureView);

pub struct VimcityApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

struct AppState {
    config: ViewerConfig,
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    ui_manager: Option<UiManager>,
    scene: Scene,
    session: Session,
    driver: FrameDriver,
    controller: CameraController,
    input: FrameInput,
    /// Platform close event seen since the last tick
    close_event: bool,
    cursor_captured: bool,
    last_tick: Instant,
    next_frame: Instant,
    /// First unrecoverable error; returned from [`VimcityApp::run`]
    fatal: Option<ViewerError>,
}

impl VimcityApp {
    /// Creates the event loop and the scene. The window opens in [`run`](Self::run).
    pub fn new(config: ViewerConfig) -> Result<Self, ViewerError> {
        let event_loop = EventLoop::new()?;
        let scene = Scene::new(config.column_count);
        let session = Session::new(config.screen_width, config.screen_height);
        let driver = FrameDriver::new(config.variant);
        let now = Instant::now();

        info!("Starting {} ({:?} variant)", config.title, config.variant);

        Ok(Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                config,
                window: None,
                render_engine: None,
                ui_manager: None,
                scene,
                session,
                driver,
                controller: CameraController::default(),
                input: FrameInput::new(),
                close_event: false,
                cursor_captured: false,
                last_tick: now,
                next_frame: now,
                fatal: None,
            },
        })
    }

    /// Runs until the window closes. Consumes the app.
    pub fn run(mut self) -> Result<(), ViewerError> {
        let event_loop = self
            .event_loop
            .take()
            .ok_or(ViewerError::EventLoop(winit::error::EventLoopError::RecreationAttempt))?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self.app_state)?;

        match self.app_state.fatal.take() {
            Some(e) => Err(e),
            None => {
                info!("Viewer closed");
                Ok(())
            }
        }
    }
}

impl AppState {
    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<(), ViewerError> {
        let attributes = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.screen_width, self.config.screen_height))
            .with_resizable(true);
        let window = Arc::new(event_loop.create_window(attributes)?);

        let (width, height) = window.inner_size().into();
        self.session.screen_size = (width, height);

        let window_clone = window.clone();
        let renderer = pollster::block_on(RenderEngine::new(window_clone, width, height))?;

        let ui_manager = UiManager::new(
            renderer.device(),
            renderer.queue(),
            renderer.surface_format(),
            &window,
        );

        self.cursor_captured = set_cursor_captured(&window, true);
        self.ui_manager = Some(ui_manager);
        self.render_engine = Some(renderer);
        self.window = Some(window);

        let now = Instant::now();
        self.last_tick = now;
        self.next_frame = now;
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, e: ViewerError) {
        error!("{}", e);
        if self.fatal.is_none() {
            self.fatal = Some(e);
        }
        event_loop.exit();
    }

    /// The cursor is free only while the GUI exit menu is open
    fn sync_cursor(&mut self) {
        let Some(window) = self.window.as_ref() else {
            return;
        };

        let want_captured =
            !(self.config.variant == Variant::Gui && self.session.flags.confirm_exit_visible);
        if want_captured != self.cursor_captured {
            self.cursor_captured = set_cursor_captured(window, want_captured);
        }
        self.controller.mouse_look = self.cursor_captured;
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let dt = (now - self.last_tick).as_secs_f32();
        self.last_tick = now;

        self.sync_cursor();

        let AppState {
            window,
            render_engine,
            ui_manager,
            scene,
            session,
            driver,
            controller,
            input,
            close_event,
            ..
        } = self;
        let (Some(window), Some(render_engine)) = (window.as_ref(), render_engine.as_mut()) else {
            return;
        };

        let signals = WindowSignals::collect(*close_event, window.inner_size().into(), driver.variant(), input);
        *close_event = false;

        let request = driver.tick(session, signals, input, dt, scene, controller);
        input.end_tick();

        let Some(request) = request else {
            if driver.close() {
                event_loop.exit();
            }
            return;
        };

        let dropdown = session.flags.dropdown;
        let mut response = OverlayResponse::default();
        let rendered = match ui_manager.as_mut() {
            Some(ui_manager) => render_engine.render_frame(
                &request,
                Some(
                    |device: &wgpu::Device,
                     queue: &wgpu::Queue,
                     encoder: &mut wgpu::CommandEncoder,
                     view: &wgpu::TextureView| {
                        response = ui_manager.draw(device, queue, encoder, window, view, |ui| {
                            draw_overlay(ui, &request, dropdown)
                        });
                    },
                ),
            ),
            None => render_engine.render_frame(&request, None::<UiPass>),
        };

        driver.apply_overlay(session, &response);

        if let Err(e) = rendered {
            self.fail(event_loop, e);
            return;
        }

        if self.driver.state() == LoopState::ExitRequested && self.driver.close() {
            event_loop.exit();
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.init_graphics(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(window) = self.window.clone() else {
            return;
        };

        // ImGui sees every event first but only ever claims the mouse
        let mut ui_wants_mouse = false;
        if let Some(ui_manager) = self.ui_manager.as_mut() {
            let ui_event: Event<()> = Event::WindowEvent {
                window_id,
                event: event.clone(),
            };
            ui_wants_mouse = ui_manager.handle_input(&window, &ui_event);
        }

        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key_code),
                        state,
                        repeat,
                        ..
                    },
                ..
            } => {
                self.input.on_key(key_code, state, repeat);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                if !ui_wants_mouse {
                    self.input.on_mouse_wheel(delta);
                }
            }
            WindowEvent::Focused(false) => {
                self.input.release_all();
            }
            WindowEvent::Resized(size) => {
                if let Some(render_engine) = self.render_engine.as_mut() {
                    render_engine.resize(size.width, size.height);
                }
                window.request_redraw();
            }
            WindowEvent::CloseRequested => {
                self.close_event = true;
                window.request_redraw();
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => (),
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            if self.cursor_captured {
                self.input.on_mouse_motion(dx, dy);
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = self.window.as_ref() else {
            return;
        };

        let now = Instant::now();
        if now >= self.next_frame {
            window.request_redraw();
            self.next_frame += self.config.frame_interval();
            if self.next_frame < now {
                self.next_frame = now + self.config.frame_interval();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}

/// Locks (or at least confines) and hides the cursor, or releases it.
/// Returns whether the cursor ended up captured.
fn set_cursor_captured(window: &Window, captured: bool) -> bool {
    if !captured {
        if let Err(e) = window.set_cursor_grab(CursorGrabMode::None) {
            warn!("Failed to release cursor: {}", e);
        }
        window.set_cursor_visible(true);
        return false;
    }

    let grabbed = window
        .set_cursor_grab(CursorGrabMode::Locked)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
    match grabbed {
        Ok(()) => {
            window.set_cursor_visible(false);
            true
        }
        Err(e) => {
            warn!("Cursor grab unavailable, mouse look disabled: {}", e);
            false
        }
    }
}
