pub mod camera_controller;
pub mod camera_state;
pub mod camera_utils;
pub mod mode;
pub mod pose;
pub mod projection;

// Re-export main types
pub use camera_controller::{CameraController, PoseIntegrator, StillCamera};
pub use camera_state::CameraModeState;
pub use camera_utils::CameraUniform;
pub use mode::CameraMode;
pub use pose::{CameraPose, ProjectionKind};
pub use projection::{ProjectionProfile, ORTHOGRAPHIC_ISOMETRIC, PERSPECTIVE_DEFAULT};
