//! Frame loop driver
//!
//! Sequences one tick: window signals, the key pressed this tick, pose
//! integration, then a [`DrawRequest`] for the renderer and overlay. The
//! driver owns the loop state; everything else it touches is passed in.

use log::info;

use crate::{
    config::Variant,
    gfx::{
        camera::{CameraMode, CameraPose, PoseIntegrator},
        scene::{DrawList, Scene},
    },
    input::{FrameInput, InputMapper},
    session::Session,
    ui::OverlayResponse,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Running,
    /// The window was asked to close or the user confirmed quitting
    ExitRequested,
    Closed,
}

/// What the window reported since the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSignals {
    pub close_requested: bool,
    /// Current inner size in physical pixels
    pub size: (u32, u32),
}

impl WindowSignals {
    /// Combines the platform close event with the variant's exit key
    pub fn collect(close_event: bool, size: (u32, u32), variant: Variant, input: &FrameInput) -> Self {
        let exit_key = variant.exit_key().is_some_and(|key| input.was_pressed(key));
        Self {
            close_requested: close_event || exit_key,
            size,
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct DrawRequest {
    pub pose: CameraPose,
    pub mode: CameraMode,
    pub draw_list: DrawList,
    pub screen_size: (u32, u32),
    pub show_help: bool,
    pub show_exit_menu: bool,
    pub show_confirm_dialog: bool,
}

impl DrawRequest {
    /// Width over height, falling back to 1 while the window is minimized
    pub fn aspect(&self) -> f32 {
        let (width, height) = self.screen_size;
        if width == 0 || height == 0 {
            1.0
        } else {
            width as f32 / height as f32
        }
    }
}

#[derive(Debug)]
pub struct FrameDriver {
    state: LoopState,
    mapper: InputMapper,
}

impl FrameDriver {
    pub fn new(variant: Variant) -> Self {
        Self {
            state: LoopState::Running,
            mapper: InputMapper::new(variant),
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn variant(&self) -> Variant {
        self.mapper.variant()
    }

    /// Runs one tick and returns what to draw.
    ///
    /// Returns `None` unless the loop was running when the tick started. A
    /// close signal moves to [`LoopState::ExitRequested`] but the rest of the
    /// tick still runs, so the last frame is drawn.
    pub fn tick<I: PoseIntegrator + ?Sized>(
        &mut self,
        session: &mut Session,
        signals: WindowSignals,
        input: &FrameInput,
        dt: f32,
        scene: &Scene,
        integrator: &mut I,
    ) -> Option<DrawRequest> {
        if self.state != LoopState::Running {
            return None;
        }

        session.screen_size = signals.size;
        if signals.close_requested {
            self.request_exit("window close requested");
        }

        self.mapper.handle_key(session, input.pressed_key());
        if session.flags.exit_requested {
            self.request_exit("exit confirmed");
        }

        integrator.update_pose(&mut session.camera.pose, session.camera.mode, input, dt);

        let gui = self.mapper.variant() == Variant::Gui;
        let flags = &session.flags;
        Some(DrawRequest {
            pose: session.camera.pose,
            mode: session.camera.mode,
            draw_list: scene.draw_list(session.camera.mode, &session.camera.pose),
            screen_size: session.screen_size,
            show_help: flags.menu_visible,
            show_exit_menu: gui && flags.confirm_exit_visible,
            show_confirm_dialog: gui && flags.confirm_exit_visible && flags.confirm_choice_pending,
        })
    }

    /// Folds the overlay's widget results in after the frame was drawn
    pub fn apply_overlay(&mut self, session: &mut Session, response: &OverlayResponse) {
        if self.mapper.apply_overlay(session, response) {
            self.request_exit("exit confirmed");
        }
    }

    /// Finishes shutdown. Only allowed once an exit was requested.
    pub fn close(&mut self) -> bool {
        if self.state != LoopState::ExitRequested {
            return false;
        }
        info!("Closing viewer");
        self.state = LoopState::Closed;
        true
    }

    fn request_exit(&mut self, reason: &str) {
        if self.state == LoopState::Running {
            info!("Exit requested: {}", reason);
            self.state = LoopState::ExitRequested;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::camera::StillCamera;
    use crate::ui::DialogResult;
    use rand::{rngs::StdRng, SeedableRng};
    use winit::{event::ElementState, keyboard::KeyCode};

    fn setup(variant: Variant) -> (FrameDriver, Session, Scene) {
        (
            FrameDriver::new(variant),
            Session::new(1200, 600),
            Scene::generate(4, &mut StdRng::seed_from_u64(3)),
        )
    }

    fn signals() -> WindowSignals {
        WindowSignals {
            close_requested: false,
            size: (1200, 600),
        }
    }

    fn press(code: KeyCode) -> FrameInput {
        let mut input = FrameInput::new();
        input.on_key(code, ElementState::Pressed, false);
        input
    }

    #[test]
    fn test_idle_tick_draws_startup_state() {
        let (mut driver, mut session, scene) = setup(Variant::Plain);
        let request = driver
            .tick(&mut session, signals(), &FrameInput::new(), 1.0 / 60.0, &scene, &mut StillCamera)
            .expect("running driver draws");

        assert_eq!(driver.state(), LoopState::Running);
        assert_eq!(request.mode, CameraMode::FirstPerson);
        assert_eq!(request.pose, CameraPose::default());
        assert_eq!(request.screen_size, (1200, 600));
        assert!(!request.show_help && !request.show_exit_menu && !request.show_confirm_dialog);
    }

    #[test]
    fn test_tick_caches_screen_size() {
        let (mut driver, mut session, scene) = setup(Variant::Plain);
        let resized = WindowSignals {
            close_requested: false,
            size: (800, 800),
        };
        let request = driver
            .tick(&mut session, resized, &FrameInput::new(), 0.016, &scene, &mut StillCamera)
            .expect("running driver draws");
        assert_eq!(session.screen_size, (800, 800));
        assert_eq!(request.aspect(), 1.0);
    }

    #[test]
    fn test_minimized_window_keeps_unit_aspect() {
        let (mut driver, mut session, scene) = setup(Variant::Plain);
        let minimized = WindowSignals {
            close_requested: false,
            size: (0, 0),
        };
        let request = driver
            .tick(&mut session, minimized, &FrameInput::new(), 0.016, &scene, &mut StillCamera)
            .expect("running driver draws");
        assert_eq!(request.aspect(), 1.0);
    }

    #[test]
    fn test_key_press_reaches_mapper() {
        let (mut driver, mut session, scene) = setup(Variant::Plain);
        let request = driver
            .tick(&mut session, signals(), &press(KeyCode::Digit3), 0.016, &scene, &mut StillCamera)
            .expect("running driver draws");
        assert_eq!(request.mode, CameraMode::ThirdPerson);
        assert_eq!(session.mode(), CameraMode::ThirdPerson);
    }

    #[test]
    fn test_close_signal_still_draws_last_frame() {
        let (mut driver, mut session, scene) = setup(Variant::Plain);
        let closing = WindowSignals {
            close_requested: true,
            size: (1200, 600),
        };

        let request = driver.tick(&mut session, closing, &press(KeyCode::KeyM), 0.016, &scene, &mut StillCamera);
        assert!(request.is_some_and(|r| r.show_help));
        assert_eq!(driver.state(), LoopState::ExitRequested);

        assert!(driver
            .tick(&mut session, signals(), &FrameInput::new(), 0.016, &scene, &mut StillCamera)
            .is_none());
        assert!(driver.close());
        assert_eq!(driver.state(), LoopState::Closed);
        assert!(driver
            .tick(&mut session, signals(), &FrameInput::new(), 0.016, &scene, &mut StillCamera)
            .is_none());
    }

    #[test]
    fn test_close_refused_while_running() {
        let (mut driver, _, _) = setup(Variant::Gui);
        assert!(!driver.close());
        assert_eq!(driver.state(), LoopState::Running);
    }

    #[test]
    fn test_plain_exit_key_raises_close_signal() {
        let input = press(KeyCode::Escape);
        assert!(WindowSignals::collect(false, (1, 1), Variant::Plain, &input).close_requested);
        assert!(!WindowSignals::collect(false, (1, 1), Variant::Gui, &input).close_requested);
        assert!(WindowSignals::collect(true, (1, 1), Variant::Gui, &FrameInput::new()).close_requested);
    }

    #[test]
    fn test_gui_keyboard_exit_flow() {
        let (mut driver, mut session, scene) = setup(Variant::Gui);

        let request = driver
            .tick(&mut session, signals(), &press(KeyCode::Escape), 0.016, &scene, &mut StillCamera)
            .expect("running driver draws");
        assert!(request.show_exit_menu);
        assert!(!request.show_confirm_dialog);

        let request = driver
            .tick(&mut session, signals(), &press(KeyCode::KeyQ), 0.016, &scene, &mut StillCamera)
            .expect("running driver draws");
        assert!(request.show_confirm_dialog);

        let request = driver.tick(&mut session, signals(), &press(KeyCode::KeyY), 0.016, &scene, &mut StillCamera);
        assert!(request.is_some());
        assert_eq!(driver.state(), LoopState::ExitRequested);
    }

    #[test]
    fn test_overlay_yes_requests_exit() {
        let (mut driver, mut session, _) = setup(Variant::Gui);
        session.flags.confirm_exit_visible = true;
        session.flags.confirm_choice_pending = true;

        driver.apply_overlay(
            &mut session,
            &OverlayResponse {
                dialog: DialogResult::No,
                ..Default::default()
            },
        );
        assert_eq!(driver.state(), LoopState::Running);

        session.flags.confirm_choice_pending = true;
        driver.apply_overlay(
            &mut session,
            &OverlayResponse {
                dialog: DialogResult::Yes,
                ..Default::default()
            },
        );
        assert_eq!(driver.state(), LoopState::ExitRequested);
    }

    #[test]
    fn test_plain_variant_never_shows_gui_panels() {
        let (mut driver, mut session, scene) = setup(Variant::Plain);
        session.flags.confirm_exit_visible = true;
        session.flags.confirm_choice_pending = true;
        let request = driver
            .tick(&mut session, signals(), &FrameInput::new(), 0.016, &scene, &mut StillCamera)
            .expect("running driver draws");
        assert!(!request.show_exit_menu);
        assert!(!request.show_confirm_dialog);
    }
}
