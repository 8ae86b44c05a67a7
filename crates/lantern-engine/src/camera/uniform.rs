use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};

/// GPU layout of the camera uniform (80 bytes).
///
///  offset  0  position   vec4<f32>   (w = 1, unused by shaders)
///  offset 16  view_proj  mat4x4<f32> (column-major)
///
/// Field order is fixed; shaders declare the same struct.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    pub position: [f32; 4],
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub const SIZE: u64 = std::mem::size_of::<Self>() as u64;

    #[inline]
    pub fn new(position: Vec3, view_proj: Mat4) -> Self {
        Self {
            position: position.extend(1.0).to_array(),
            view_proj: view_proj.to_cols_array_2d(),
        }
    }

    /// Camera at the origin with an identity transform: positions are clip space.
    #[inline]
    pub fn identity() -> Self {
        Self::new(Vec3::ZERO, Mat4::IDENTITY)
    }

    /// Pixel-space camera for overlays: origin top-left, +Y down, one unit per pixel.
    ///
    /// Zero sizes are treated as 1 so the matrix stays finite.
    pub fn canvas(width: u32, height: u32) -> Self {
        let w = width.max(1) as f32;
        let h = height.max(1) as f32;
        Self::new(Vec3::ZERO, Mat4::orthographic_rh(0.0, w, h, 0.0, -1.0, 1.0))
    }

    #[inline]
    pub fn view_proj(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.view_proj)
    }

    /// Clip-space position the vertex stage produces for `position`.
    #[inline]
    pub fn clip_position(&self, position: [f32; 3]) -> Vec4 {
        self.view_proj() * Vec3::from_array(position).extend(1.0)
    }

    /// True if every component is finite. Shaders cannot detect a bad matrix.
    pub fn is_finite(&self) -> bool {
        self.position.iter().all(|v| v.is_finite())
            && self.view_proj.iter().flatten().all(|v| v.is_finite())
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::identity()
    }
}
