use winit::keyboard::KeyCode;

use crate::gfx::camera::CameraMode;

/// Keys the mapper reacts to. Everything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    One,
    Two,
    Three,
    Four,
    M,
    P,
    Escape,
    S,
    Q,
    Y,
    N,
}

impl Key {
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        let key = match code {
            KeyCode::Digit1 => Key::One,
            KeyCode::Digit2 => Key::Two,
            KeyCode::Digit3 => Key::Three,
            KeyCode::Digit4 => Key::Four,
            KeyCode::KeyM => Key::M,
            KeyCode::KeyP => Key::P,
            KeyCode::Escape => Key::Escape,
            KeyCode::KeyS => Key::S,
            KeyCode::KeyQ => Key::Q,
            KeyCode::KeyY => Key::Y,
            KeyCode::KeyN => Key::N,
            _ => return None,
        };
        Some(key)
    }

    /// Camera mode selected by the number keys
    pub fn camera_mode(self) -> Option<CameraMode> {
        match self {
            Key::One => Some(CameraMode::Free),
            Key::Two => Some(CameraMode::FirstPerson),
            Key::Three => Some(CameraMode::ThirdPerson),
            Key::Four => Some(CameraMode::Orbital),
            _ => None,
        }
    }
}
