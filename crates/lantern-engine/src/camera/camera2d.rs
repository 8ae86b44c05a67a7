use glam::{Mat4, Vec3};

use super::CameraUniform;

/// World-space orthographic camera.
///
/// `view_height` is the visible extent along Y in world units; the X extent
/// follows from `aspect_ratio`. The view is centred on `position.xy` and
/// covers depth -1..1.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera2d {
    pub position: Vec3,
    pub view_height: f32,
    pub aspect_ratio: f32,
}

impl Default for Camera2d {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            view_height: 2.0,
            aspect_ratio: 1.0,
        }
    }
}

impl Camera2d {
    #[inline]
    pub fn new(position: Vec3, view_height: f32) -> Self {
        Self { position, view_height, ..Default::default() }
    }

    /// Updates the aspect ratio from a surface size. Zero sizes (minimized
    /// windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect_ratio = width as f32 / height as f32;
    }

    pub fn view_proj(&self) -> Mat4 {
        let half_h = self.view_height * 0.5;
        let half_w = half_h * self.aspect_ratio;
        let (x, y) = (self.position.x, self.position.y);

        Mat4::orthographic_rh(x - half_w, x + half_w, y - half_h, y + half_h, -1.0, 1.0)
    }
}

impl From<Camera2d> for CameraUniform {
    fn from(src: Camera2d) -> Self {
        CameraUniform::new(src.position, src.view_proj())
    }
}
