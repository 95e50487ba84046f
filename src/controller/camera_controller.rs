use crate::config::GameConfig;
use crate::model::Camera;
use glam::{Mat4, Vec3};

/// Keeps the camera behind and above the player with exponential
/// smoothing, so the follow is soft rather than rigidly attached.
pub struct CameraController {
    pub offset: Vec3,
    pub blend: f32,
}

impl CameraController {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            offset: Vec3::new(0.0, config.camera_up, config.camera_back),
            blend: config.camera_blend,
        }
    }

    /// Desired world-to-camera transform: the inverse of the player pose
    /// composed with the fixed back/up offset.
    pub fn target_view(&self, player_transform: Mat4) -> Mat4 {
        (player_transform * Mat4::from_translation(self.offset)).inverse()
    }

    /// One smoothing step: component-wise
    /// `view = previous * (1 - blend) + target * blend`.
    pub fn follow(&self, camera: &mut Camera, player_transform: Mat4) {
        let target = self.target_view(player_transform);
        camera.view = camera.view * (1.0 - self.blend) + target * self.blend;
    }
}
