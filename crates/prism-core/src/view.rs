use glam::{Mat4, Vec3};

use crate::command::Command;

/// Zoom factor applied per press. Zooming out uses the reciprocal, so equal
/// numbers of in/out presses compose back to the starting matrix.
pub const ZOOM_STEP: f32 = 1.1;

const FOV_Y_DEGREES: f32 = 45.0;
const NEAR: f32 = 0.1;
const FAR: f32 = 100.0;
const CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 0.0, -5.0);

/// The single accumulated scene matrix: perspective projection, a fixed
/// camera back-off, and every rotation and zoom step applied since startup.
///
/// Rotation and zoom post-multiply, so they act in model space under the
/// fixed projection. There is no separate model matrix and nothing resets;
/// commands compound indefinitely. Numerical drift over very long runs is
/// accepted; no renormalization is performed.
#[derive(Debug, Copy, Clone)]
pub struct ViewTransform {
    matrix: Mat4,
}

impl ViewTransform {
    /// Builds the initial matrix for the given aspect ratio: 45° vertical
    /// field of view, near plane 0.1, far plane 100.0 (right-handed, 0..1
    /// clip depth), then a translation of (0,0,-5) to put the prism in
    /// front of the camera.
    pub fn new(aspect_ratio: f32) -> Self {
        let projection =
            Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), aspect_ratio, NEAR, FAR);
        Self {
            matrix: projection * Mat4::from_translation(CAMERA_OFFSET),
        }
    }

    /// Applies one frame's rotation increment for `command`.
    ///
    /// A zero angle returns without touching the matrix, so `Command::None`
    /// freezes the spin while keeping whatever rotation has accumulated.
    /// (Zero-angle commands are also the only ones with a zero axis, which
    /// must not be normalized.)
    pub fn apply_rotation(&mut self, command: Command) {
        let (angle_degrees, axis) = command.rotation();
        if angle_degrees == 0.0 {
            return;
        }
        self.matrix *= Mat4::from_axis_angle(axis.normalize(), angle_degrees.to_radians());
    }

    /// One zoom-in step: uniform scale by [`ZOOM_STEP`]. Unclamped;
    /// repeated presses compound without bound.
    pub fn zoom_in(&mut self) {
        self.matrix *= Mat4::from_scale(Vec3::splat(ZOOM_STEP));
    }

    /// One zoom-out step: uniform scale by the reciprocal of [`ZOOM_STEP`].
    /// Unclamped.
    pub fn zoom_out(&mut self) {
        self.matrix *= Mat4::from_scale(Vec3::splat(1.0 / ZOOM_STEP));
    }

    /// The current matrix, bound as the shader's `matrix` uniform.
    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── helpers ──────────────────────────────────────────────────────

    fn assert_mat4_close(actual: Mat4, expected: Mat4, tolerance: f32) {
        let a = actual.to_cols_array();
        let e = expected.to_cols_array();
        for k in 0..16 {
            assert!(
                (a[k] - e[k]).abs() <= tolerance,
                "element {k}: {} vs {}",
                a[k],
                e[k]
            );
        }
    }

    /// Perspective matrix reconstructed from first principles (right-handed,
    /// 0..1 clip depth), independent of glam's implementation.
    fn expected_perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        let h = 1.0 / (fov_y / 2.0).tan();
        let w = h / aspect;
        let r = far / (near - far);
        Mat4::from_cols_array_2d(&[
            [w, 0.0, 0.0, 0.0],
            [0.0, h, 0.0, 0.0],
            [0.0, 0.0, r, -1.0],
            [0.0, 0.0, r * near, 0.0],
        ])
    }

    // ── initial projection ───────────────────────────────────────────

    #[test]
    fn init_matches_reconstructed_projection_times_back_off() {
        let vt = ViewTransform::new(800.0 / 600.0);
        let expected = expected_perspective(45f32.to_radians(), 800.0 / 600.0, 0.1, 100.0)
            * Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0));
        assert_mat4_close(vt.matrix(), expected, 1e-5);
    }

    #[test]
    fn projection_encodes_the_field_of_view() {
        let vt = ViewTransform::new(800.0 / 600.0);
        let m = vt.matrix().to_cols_array_2d();
        // m[1][1] is 1/tan(fov/2); the back-off translation does not touch it.
        let h = 1.0 / (45f32.to_radians() / 2.0).tan();
        assert!((m[1][1] - h).abs() <= 1e-5);
    }

    // ── rotation ─────────────────────────────────────────────────────

    #[test]
    fn none_is_a_true_no_op() {
        let mut vt = ViewTransform::new(800.0 / 600.0);
        vt.apply_rotation(Command::Right);
        vt.apply_rotation(Command::Up);
        let before = vt.matrix().to_cols_array();
        for _ in 0..10 {
            vt.apply_rotation(Command::None);
        }
        assert_eq!(vt.matrix().to_cols_array(), before);
    }

    #[test]
    fn rotation_post_multiplies_the_accumulated_state() {
        let mut vt = ViewTransform::new(1.0);
        vt.apply_rotation(Command::Right);
        let expected =
            ViewTransform::new(1.0).matrix() * Mat4::from_axis_angle(Vec3::Y, 1f32.to_radians());
        assert_mat4_close(vt.matrix(), expected, 1e-6);
    }

    #[test]
    fn rotation_accumulates_across_frames() {
        let mut stepped = ViewTransform::new(1.0);
        for _ in 0..90 {
            stepped.apply_rotation(Command::Right);
        }
        let expected =
            ViewTransform::new(1.0).matrix() * Mat4::from_axis_angle(Vec3::Y, 90f32.to_radians());
        assert_mat4_close(stepped.matrix(), expected, 1e-4);
    }

    // ── zoom ─────────────────────────────────────────────────────────

    #[test]
    fn zoom_pairs_cancel_within_tolerance() {
        let mut vt = ViewTransform::new(800.0 / 600.0);
        let before = vt.matrix();
        for _ in 0..5 {
            vt.zoom_in();
        }
        for _ in 0..5 {
            vt.zoom_out();
        }
        assert_mat4_close(vt.matrix(), before, 1e-5);
    }

    #[test]
    fn zoom_compounds_without_bound() {
        let mut vt = ViewTransform::new(1.0);
        for _ in 0..100 {
            vt.zoom_in();
        }
        // 1.1^100 ≈ 13780; nothing clamps the scale.
        let m = vt.matrix().to_cols_array_2d();
        assert!(m[0][0].abs() > 1_000.0);
    }
}
