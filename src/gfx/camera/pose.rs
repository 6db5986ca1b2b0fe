use cgmath::*;

use super::camera_utils::{convert_matrix4_to_array, Camera, CameraUniform};

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

/// Near clip distance shared by both projections
pub const Z_NEAR: f32 = 0.01;
/// Far clip distance shared by both projections
pub const Z_FAR: f32 = 1000.0;

/// Margin kept between a locked view and the up/down poles, in radians
const PITCH_POLE_MARGIN: f32 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionKind {
    Perspective,
    Orthographic,
}

impl ProjectionKind {
    pub fn label(self) -> &'static str {
        match self {
            ProjectionKind::Perspective => "PERSPECTIVE",
            ProjectionKind::Orthographic => "ORTHOGRAPHIC",
        }
    }
}

/// Placement and framing of the camera.
///
/// `fovy` is the vertical field of view in degrees for a perspective
/// projection. For an orthographic projection it is the height of the view
/// volume in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub fovy: f32,
    pub projection: ProjectionKind,
}

impl Default for CameraPose {
    /// Pose the viewer starts with: eye level, 4 units in front of the origin.
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 2.0, 4.0),
            target: Vector3::new(0.0, 2.0, 0.0),
            up: Vector3::unit_y(),
            fovy: 60.0,
            projection: ProjectionKind::Perspective,
        }
    }
}

impl CameraPose {
    /// Normalized view direction
    pub fn forward(&self) -> Vector3<f32> {
        (self.target - self.position).normalize()
    }

    /// Normalized up vector
    pub fn up_direction(&self) -> Vector3<f32> {
        self.up.normalize()
    }

    /// Normalized camera-right vector
    pub fn right(&self) -> Vector3<f32> {
        self.forward().cross(self.up_direction()).normalize()
    }

    /// Rotates the view around the up vector.
    ///
    /// With `rotate_around_target` the eye swings around the target,
    /// otherwise the target swings around the eye.
    pub fn yaw(&mut self, angle: f32, rotate_around_target: bool) {
        let up = self.up_direction();
        let view = rotate_by_axis_angle(self.target - self.position, up, angle);
        self.apply_view(view, rotate_around_target);
    }

    /// Rotates the view around the camera-right axis.
    ///
    /// `lock_view` clamps the rotation so the view never passes straight up or
    /// straight down. `rotate_up` carries the up vector along (free flight).
    pub fn pitch(&mut self, angle: f32, lock_view: bool, rotate_around_target: bool, rotate_up: bool) {
        let up = self.up_direction();
        let view = self.target - self.position;

        let mut angle = angle;
        if lock_view {
            let max_angle_up = up.angle(view).0 - PITCH_POLE_MARGIN;
            if angle > max_angle_up {
                angle = max_angle_up;
            }

            let max_angle_down = -(-up).angle(view).0 + PITCH_POLE_MARGIN;
            if angle < max_angle_down {
                angle = max_angle_down;
            }
        }

        let right = self.right();
        let view = rotate_by_axis_angle(view, right, angle);
        self.apply_view(view, rotate_around_target);

        if rotate_up {
            self.up = rotate_by_axis_angle(self.up, right, angle);
        }
    }

    /// Rotates the up vector around the view direction
    pub fn roll(&mut self, angle: f32) {
        let forward = self.forward();
        self.up = rotate_by_axis_angle(self.up, forward, angle);
    }

    pub fn move_forward(&mut self, distance: f32, in_world_plane: bool) {
        let mut forward = self.forward();
        if in_world_plane {
            forward.y = 0.0;
            forward = normalize_or_zero(forward);
        }
        self.translate(forward * distance);
    }

    pub fn move_right(&mut self, distance: f32, in_world_plane: bool) {
        let mut right = self.right();
        if in_world_plane {
            right.y = 0.0;
            right = normalize_or_zero(right);
        }
        self.translate(right * distance);
    }

    pub fn move_up(&mut self, distance: f32) {
        let up = self.up_direction();
        self.translate(up * distance);
    }

    /// Moves the eye along the view direction, keeping the target fixed.
    /// The resulting distance never drops below 0.001.
    pub fn move_to_target(&mut self, delta: f32) {
        let mut distance = self.position.distance(self.target) + delta;
        if distance <= 0.0 {
            distance = 0.001;
        }
        let forward = self.forward();
        self.position = self.target - forward * distance;
    }

    pub fn distance_to_target(&self) -> f32 {
        self.position.distance(self.target)
    }

    fn translate(&mut self, offset: Vector3<f32>) {
        self.position += offset;
        self.target += offset;
    }

    fn apply_view(&mut self, view: Vector3<f32>, rotate_around_target: bool) {
        if rotate_around_target {
            self.position = self.target - view;
        } else {
            self.target = self.position + view;
        }
    }

    pub fn projection_matrix(&self, aspect: f32) -> Matrix4<f32> {
        match self.projection {
            ProjectionKind::Perspective => perspective(Deg(self.fovy), aspect, Z_NEAR, Z_FAR),
            ProjectionKind::Orthographic => {
                let top = self.fovy / 2.0;
                let right = top * aspect;
                ortho(-right, right, -top, top, Z_NEAR, Z_FAR)
            }
        }
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(
            Point3::from_vec(self.position),
            Point3::from_vec(self.target),
            self.up,
        )
    }

    /// Packs the pose into the uniform consumed by the scene shader
    pub fn to_uniform(&self, aspect: f32) -> CameraUniform {
        CameraUniform {
            view_position: [self.position.x, self.position.y, self.position.z, 1.0],
            view_proj: convert_matrix4_to_array(PoseView { pose: self, aspect }.build_view_projection_matrix()),
        }
    }
}

/// A pose paired with the aspect ratio of the surface it is drawn to
pub struct PoseView<'a> {
    pub pose: &'a CameraPose,
    pub aspect: f32,
}

impl Camera for PoseView<'_> {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * self.pose.projection_matrix(self.aspect) * self.pose.view_matrix()
    }
}

/// Right-handed rotation of `v` by `angle` radians around `axis`
pub fn rotate_by_axis_angle(v: Vector3<f32>, axis: Vector3<f32>, angle: f32) -> Vector3<f32> {
    Quaternion::from_axis_angle(axis.normalize(), Rad(angle)).rotate_vector(v)
}

fn normalize_or_zero(v: Vector3<f32>) -> Vector3<f32> {
    if v.magnitude2() > 0.0 {
        v.normalize()
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_eq(actual: Vector3<f32>, expected: Vector3<f32>) {
        assert!(
            (actual - expected).magnitude() < 1e-3,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_yaw_around_target_keeps_target() {
        let mut pose = CameraPose::default();
        pose.yaw(std::f32::consts::FRAC_PI_2, true);
        assert_vec_eq(pose.target, Vector3::new(0.0, 2.0, 0.0));
        assert!((pose.distance_to_target() - 4.0).abs() < 1e-4);
        // Quarter turn to the left around +Y moves the eye from +Z to +X
        assert_vec_eq(pose.position, Vector3::new(4.0, 2.0, 0.0));
    }

    #[test]
    fn test_yaw_in_place_moves_target() {
        let mut pose = CameraPose::default();
        pose.yaw(std::f32::consts::PI, false);
        assert_vec_eq(pose.position, Vector3::new(0.0, 2.0, 4.0));
        assert_vec_eq(pose.target, Vector3::new(0.0, 2.0, 8.0));
    }

    #[test]
    fn test_locked_pitch_stops_short_of_pole() {
        let mut pose = CameraPose::default();
        pose.pitch(std::f32::consts::PI, true, false, false);
        let view = pose.target - pose.position;
        assert!(view.angle(Vector3::unit_y()).0 > 0.0);
        assert!(view.angle(Vector3::unit_y()).0 < 0.01);
    }

    #[test]
    fn test_locked_pitch_stops_short_of_lower_pole() {
        let mut pose = CameraPose::default();
        pose.pitch(-std::f32::consts::PI, true, false, false);
        let view = pose.target - pose.position;
        let from_down = view.angle(-Vector3::unit_y()).0;
        assert!(from_down > 0.0);
        assert!(from_down < 0.01);
        assert!(view.y < 0.0);
    }

    #[test]
    fn test_roll_tilts_up() {
        let mut pose = CameraPose::default();
        pose.roll(0.3);
        assert!((pose.up.y - 0.3f32.cos()).abs() < 1e-4);
        assert_vec_eq(pose.target, Vector3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_move_forward_in_world_plane_ignores_vertical_component() {
        let mut pose = CameraPose {
            position: Vector3::new(0.0, 5.0, 5.0),
            target: Vector3::new(0.0, 0.0, 0.0),
            ..CameraPose::default()
        };
        pose.move_forward(1.0, true);
        assert_vec_eq(pose.position, Vector3::new(0.0, 5.0, 4.0));
        assert_vec_eq(pose.target, Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_move_to_target_clamps_distance() {
        let mut pose = CameraPose::default();
        pose.move_to_target(-100.0);
        assert!((pose.distance_to_target() - 0.001).abs() < 1e-5);
    }

    #[test]
    fn test_orthographic_projection_uses_fovy_as_view_height() {
        let pose = CameraPose {
            fovy: 20.0,
            projection: ProjectionKind::Orthographic,
            ..CameraPose::default()
        };
        let proj = pose.projection_matrix(2.0);
        // ortho scales x by 2 / (right - left) and y by 2 / (top - bottom)
        assert!((proj.x.x - 2.0 / 40.0).abs() < 1e-6);
        assert!((proj.y.y - 2.0 / 20.0).abs() < 1e-6);
    }
}
