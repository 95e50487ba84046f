use glam::Mat4;

/// Follow camera. Holds the smoothed view matrix the controller updates
/// each frame plus the projection parameters a host needs to render with.
pub struct Camera {
    /// Current (smoothed) world-to-camera transform.
    pub view: Mat4,
    pub fov_y: f32,
    pub aspect: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            // Start a few units back so the first blended frames are sane
            view: Mat4::from_translation(glam::Vec3::new(0.0, 0.0, -8.0)),
            fov_y: std::f32::consts::FRAC_PI_4,
            aspect,
            z_near: 1.0,
            z_far: 100.0,
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn proj(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.z_near, self.z_far)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.proj() * self.view
    }
}
