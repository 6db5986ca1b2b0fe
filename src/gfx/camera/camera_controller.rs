use cgmath::Vector3;
use winit::keyboard::KeyCode;

use crate::input::FrameInput;

use super::{mode::CameraMode, pose::rotate_by_axis_angle, pose::CameraPose};

/// Moves the camera each tick from the live keyboard and mouse state.
///
/// The frame driver calls this once per tick with whatever mode is active.
pub trait PoseIntegrator {
    fn update_pose(&mut self, pose: &mut CameraPose, mode: CameraMode, input: &FrameInput, dt: f32);
}

/// Integrator that never moves the camera
#[derive(Debug, Default, Clone, Copy)]
pub struct StillCamera;

impl PoseIntegrator for StillCamera {
    fn update_pose(&mut self, _pose: &mut CameraPose, _mode: CameraMode, _input: &FrameInput, _dt: f32) {}
}

pub struct CameraController {
    /// World units per second
    pub move_speed: f32,
    /// Radians per tick for arrow-key look and Q/E roll
    pub rotation_speed: f32,
    /// Radians per pixel of mouse motion
    pub mouse_sensitivity: f32,
    /// Radians per second in orbital mode
    pub orbital_speed: f32,
    /// World units per numpad zoom press
    pub zoom_step: f32,
    /// Mouse look is suspended while the cursor is released for the GUI
    pub mouse_look: bool,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(5.4, 0.03)
    }
}

impl CameraController {
    pub fn new(move_speed: f32, rotation_speed: f32) -> Self {
        Self {
            move_speed,
            rotation_speed,
            mouse_sensitivity: 0.003,
            orbital_speed: 0.5,
            zoom_step: 2.0,
            mouse_look: true,
        }
    }

    fn orbit(&self, pose: &mut CameraPose, dt: f32) {
        let up = pose.up_direction();
        let view = rotate_by_axis_angle(pose.position - pose.target, up, self.orbital_speed * dt);
        pose.position = pose.target + view;
    }

    fn look_and_move(&self, pose: &mut CameraPose, mode: CameraMode, input: &FrameInput, dt: f32) {
        let in_world_plane = mode.moves_in_world_plane();
        let around_target = mode.rotates_around_target();
        let lock_view = true;
        let rotate_up = false;

        // Keyboard look
        if input.is_down(KeyCode::ArrowDown) {
            pose.pitch(-self.rotation_speed, lock_view, around_target, rotate_up);
        }
        if input.is_down(KeyCode::ArrowUp) {
            pose.pitch(self.rotation_speed, lock_view, around_target, rotate_up);
        }
        if input.is_down(KeyCode::ArrowRight) {
            pose.yaw(-self.rotation_speed, around_target);
        }
        if input.is_down(KeyCode::ArrowLeft) {
            pose.yaw(self.rotation_speed, around_target);
        }
        if input.is_down(KeyCode::KeyQ) {
            pose.roll(-self.rotation_speed);
        }
        if input.is_down(KeyCode::KeyE) {
            pose.roll(self.rotation_speed);
        }

        // Mouse look
        if self.mouse_look {
            let (dx, dy) = input.mouse_delta();
            if dx != 0.0 {
                pose.yaw(-dx * self.mouse_sensitivity, around_target);
            }
            if dy != 0.0 {
                pose.pitch(-dy * self.mouse_sensitivity, lock_view, around_target, rotate_up);
            }
        }

        // Movement
        let step = self.move_speed * dt;
        if input.is_down(KeyCode::KeyW) {
            pose.move_forward(step, in_world_plane);
        }
        if input.is_down(KeyCode::KeyA) {
            pose.move_right(-step, in_world_plane);
        }
        if input.is_down(KeyCode::KeyS) {
            pose.move_forward(-step, in_world_plane);
        }
        if input.is_down(KeyCode::KeyD) {
            pose.move_right(step, in_world_plane);
        }

        if mode == CameraMode::Free {
            if input.is_down(KeyCode::Space) {
                pose.move_up(step);
            }
            if input.is_down(KeyCode::ControlLeft) {
                pose.move_up(-step);
            }
        }
    }

    fn zoom(&self, pose: &mut CameraPose, input: &FrameInput) {
        let wheel = input.wheel();
        if wheel != 0.0 {
            pose.move_to_target(-wheel);
        }
        if input.was_pressed(KeyCode::NumpadSubtract) {
            pose.move_to_target(self.zoom_step);
        }
        if input.was_pressed(KeyCode::NumpadAdd) {
            pose.move_to_target(-self.zoom_step);
        }
    }
}

impl PoseIntegrator for CameraController {
    fn update_pose(&mut self, pose: &mut CameraPose, mode: CameraMode, input: &FrameInput, dt: f32) {
        if mode == CameraMode::Orbital {
            self.orbit(pose, dt);
        } else {
            self.look_and_move(pose, mode, input, dt);
        }

        if mode.zooms_to_target() {
            self.zoom(pose, input);
        }

        // A zero-length view would make every direction NaN from here on
        if (pose.target - pose.position) == Vector3::new(0.0, 0.0, 0.0) {
            pose.position.z += 0.001;
        }
    }
}
