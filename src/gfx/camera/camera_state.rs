//! Camera mode state machine
//!
//! Owns the active [`CameraMode`] and the [`CameraPose`]. Mode switches and
//! projection toggles are the only transitions; pose integration happens
//! elsewhere and only reads the mode.

use cgmath::Vector3;
use log::debug;

use super::{
    mode::CameraMode,
    pose::{CameraPose, ProjectionKind},
    projection::ProjectionProfile,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraModeState {
    pub mode: CameraMode,
    pub pose: CameraPose,
}

impl Default for CameraModeState {
    fn default() -> Self {
        Self {
            mode: CameraMode::FirstPerson,
            pose: CameraPose::default(),
        }
    }
}

impl CameraModeState {
    pub fn new(mode: CameraMode, pose: CameraPose) -> Self {
        Self { mode, pose }
    }

    pub fn projection(&self) -> ProjectionKind {
        self.pose.projection
    }

    /// Switches mode and removes any accumulated roll
    pub fn set_mode(&mut self, mode: CameraMode) {
        self.mode = mode;
        self.pose.up = Vector3::unit_y();
        debug!("Camera mode set to {}", mode.label());
    }

    /// Flips between the perspective and isometric presets.
    ///
    /// Either direction lands in third person with the preset pose forced on;
    /// whatever the pose was before is discarded.
    pub fn toggle_projection(&mut self) {
        let next = match self.pose.projection {
            ProjectionKind::Perspective => ProjectionKind::Orthographic,
            ProjectionKind::Orthographic => ProjectionKind::Perspective,
        };

        self.mode = CameraMode::ThirdPerson;
        ProjectionProfile::for_kind(next).apply(&mut self.pose);
        debug!("Camera projection set to {}", next.label());
    }
}
