/// How input is turned into camera movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMode {
    /// Fly anywhere, including straight up and down
    Free,
    /// Walk in the ground plane, look with the mouse
    FirstPerson,
    /// Orbit-follow around the target, which is drawn as the player cube
    ThirdPerson,
    /// Spin slowly around the target
    Orbital,
}

impl CameraMode {
    pub const ALL: [CameraMode; 4] = [
        CameraMode::Free,
        CameraMode::FirstPerson,
        CameraMode::ThirdPerson,
        CameraMode::Orbital,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CameraMode::Free => "FREE",
            CameraMode::FirstPerson => "FIRST_PERSON",
            CameraMode::ThirdPerson => "THIRD_PERSON",
            CameraMode::Orbital => "ORBITAL",
        }
    }

    /// Movement is projected onto the ground plane
    pub fn moves_in_world_plane(self) -> bool {
        matches!(self, CameraMode::FirstPerson | CameraMode::ThirdPerson)
    }

    /// Look input swings the eye around the target instead of turning in place
    pub fn rotates_around_target(self) -> bool {
        matches!(self, CameraMode::ThirdPerson | CameraMode::Orbital)
    }

    /// Mouse wheel and numpad zoom move the eye toward the target
    pub fn zooms_to_target(self) -> bool {
        matches!(self, CameraMode::Free | CameraMode::ThirdPerson | CameraMode::Orbital)
    }
}
