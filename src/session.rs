//! Everything the frame loop mutates, in one owned value
//!
//! The camera, the UI flags and the cached window size are passed explicitly
//! to the input mapper and the frame driver each tick. Nothing here is global.

use crate::{
    gfx::camera::{CameraMode, CameraModeState, CameraPose},
    ui::UiFlags,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub camera: CameraModeState,
    pub flags: UiFlags,
    /// Window size in physical pixels as of the last tick
    pub screen_size: (u32, u32),
}

impl Session {
    pub fn new(screen_width: u32, screen_height: u32) -> Self {
        Self {
            camera: CameraModeState::default(),
            flags: UiFlags::default(),
            screen_size: (screen_width, screen_height),
        }
    }

    pub fn mode(&self) -> CameraMode {
        self.camera.mode
    }

    pub fn pose(&self) -> &CameraPose {
        &self.camera.pose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_state() {
        let session = Session::new(1200, 600);
        assert_eq!(session.mode(), CameraMode::FirstPerson);
        assert_eq!(session.flags, UiFlags::default());
        assert!(!session.flags.menu_visible);
        assert!(!session.flags.exit_requested);
        assert_eq!(session.screen_size, (1200, 600));
    }
}
