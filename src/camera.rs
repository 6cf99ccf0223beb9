use glam::{Mat4, Vec3, Vec4};

// Projection shared by rendering and picking.
pub const CAMERA_FOVY: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

/// Orbit camera circling a fixed target, the only camera the viewer has.
///
/// `yaw` spins around the vertical axis, `pitch` tilts above the target
/// (positive looks down), `distance` is the orbit radius. Limits are applied
/// by the input layer; this type only does the math.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl OrbitCamera {
    pub fn new(target: Vec3, yaw: f32, pitch: f32, distance: f32) -> Self {
        Self {
            target,
            yaw,
            pitch,
            distance,
        }
    }

    /// World-space eye position on the orbit sphere.
    pub fn eye(&self) -> Vec3 {
        let horiz = self.distance * self.pitch.cos();
        self.target
            + Vec3::new(
                horiz * self.yaw.sin(),
                self.distance * self.pitch.sin(),
                horiz * self.yaw.cos(),
            )
    }

    /// View matrix transforming world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    /// Clip-space projection for the given canvas aspect ratio.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(CAMERA_FOVY, aspect.max(1e-3), CAMERA_ZNEAR, CAMERA_ZFAR)
    }

    /// Compute a world-space ray from backing-store pixel coordinates.
    ///
    /// - `sx`, `sy`: pixel coordinates in the canvas backing store
    /// - `width`, `height`: backing-store dimensions in pixels
    ///
    /// Returns `(ray_origin, ray_direction)` in world space.
    pub fn screen_to_world_ray(&self, sx: f32, sy: f32, width: f32, height: f32) -> (Vec3, Vec3) {
        let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
        let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
        let aspect = width / height.max(1.0);
        let inv = (self.projection_matrix(aspect) * self.view_matrix()).inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p_far: Vec3 = p_far.truncate() / p_far.w;
        let ro = self.eye();
        let rd = (p_far - ro).normalize();
        (ro, rd)
    }
}
