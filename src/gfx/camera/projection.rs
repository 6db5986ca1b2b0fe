//! Projection presets
//!
//! Switching projection does not interpolate anything: each projection kind
//! has one preset pose that is forced onto the camera. The orthographic preset
//! fakes an isometric view. An orthographic frustum has no useful distance, so
//! the eye is pushed far back, the view is narrowed to a fixed size and the
//! camera is then swung into the canonical isometric angle around its target.

use cgmath::{Deg, Rad, Vector3};

use super::pose::{CameraPose, ProjectionKind};

/// How a profile's `fovy` is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FovyMeaning {
    /// Vertical field of view in degrees
    VerticalAngle,
    /// Extent of the near plane in world units
    NearPlaneExtent,
}

/// Fixed rotation applied around the target after a profile is forced
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub yaw_degrees: f32,
    pub pitch_degrees: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionProfile {
    pub kind: ProjectionKind,
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub up: [f32; 3],
    pub fovy: f32,
    pub fovy_meaning: FovyMeaning,
    pub tilt: Option<Tilt>,
}

pub const PERSPECTIVE_DEFAULT: ProjectionProfile = ProjectionProfile {
    kind: ProjectionKind::Perspective,
    position: [0.0, 2.0, 10.0],
    target: [0.0, 2.0, 0.0],
    up: [0.0, 1.0, 0.0],
    fovy: 60.0,
    fovy_meaning: FovyMeaning::VerticalAngle,
    tilt: None,
};

// The target distance doubles as the render distance under orthographic projection
pub const ORTHOGRAPHIC_ISOMETRIC: ProjectionProfile = ProjectionProfile {
    kind: ProjectionKind::Orthographic,
    position: [0.0, 2.0, -100.0],
    target: [0.0, 2.0, 0.0],
    up: [0.0, 1.0, 0.0],
    fovy: 20.0,
    fovy_meaning: FovyMeaning::NearPlaneExtent,
    tilt: Some(Tilt {
        yaw_degrees: -135.0,
        pitch_degrees: -45.0,
    }),
};

impl ProjectionProfile {
    pub fn for_kind(kind: ProjectionKind) -> &'static ProjectionProfile {
        match kind {
            ProjectionKind::Perspective => &PERSPECTIVE_DEFAULT,
            ProjectionKind::Orthographic => &ORTHOGRAPHIC_ISOMETRIC,
        }
    }

    /// Overwrites `pose` with this preset, then applies the tilt if any
    pub fn apply(&self, pose: &mut CameraPose) {
        pose.position = Vector3::from(self.position);
        pose.target = Vector3::from(self.target);
        pose.up = Vector3::from(self.up);
        pose.projection = self.kind;
        pose.fovy = self.fovy;

        if let Some(tilt) = self.tilt {
            pose.yaw(Rad::from(Deg(tilt.yaw_degrees)).0, true);
            pose.pitch(Rad::from(Deg(tilt.pitch_degrees)).0, true, true, false);
        }
    }
}
