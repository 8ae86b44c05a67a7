use super::{ArraySpriteVertex, ColorVertex, ShadowVertex, SpriteVertex};

/// Index pattern for one quad built by [`Quad`]; both triangles wind CCW
/// with +Y up.
pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Axis-aligned quad in world units.
///
/// `origin` is the min corner (bottom-left with +Y up). Corners are emitted
/// top-right, top-left, bottom-left, bottom-right; texture v runs top-down
/// so images are not flipped.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quad {
    pub origin: [f32; 2],
    pub size: [f32; 2],
    pub depth: f32,
}

const CORNER_UVS: [[f32; 2]; 4] = [[1.0, 0.0], [0.0, 0.0], [0.0, 1.0], [1.0, 1.0]];

impl Quad {
    #[inline]
    pub const fn new(origin: [f32; 2], size: [f32; 2], depth: f32) -> Self {
        Self { origin, size, depth }
    }

    /// Square quad centred on `center`. Soft circles and masked sprites need a
    /// square quad, otherwise the circle renders as an ellipse.
    #[inline]
    pub fn centered(center: [f32; 2], diameter: f32, depth: f32) -> Self {
        let r = diameter * 0.5;
        Self::new([center[0] - r, center[1] - r], [diameter, diameter], depth)
    }

    pub fn corners(&self) -> [[f32; 3]; 4] {
        let [x0, y0] = self.origin;
        let x1 = x0 + self.size[0];
        let y1 = y0 + self.size[1];
        let z = self.depth;

        [[x1, y1, z], [x0, y1, z], [x0, y0, z], [x1, y0, z]]
    }

    pub fn colored(&self, color: [f32; 4]) -> [ColorVertex; 4] {
        self.corners().map(|position| ColorVertex { position, color })
    }

    pub fn shadow(&self) -> [ShadowVertex; 4] {
        let c = self.corners();
        std::array::from_fn(|i| ShadowVertex { position: c[i], uv: CORNER_UVS[i] })
    }

    pub fn sprite(&self) -> [SpriteVertex; 4] {
        let c = self.corners();
        std::array::from_fn(|i| SpriteVertex { position: c[i], tex_coords: CORNER_UVS[i] })
    }

    /// Use [`TextureLayers::index`](crate::render::TextureLayers::index) to get a
    /// checked `tex_index`.
    pub fn array_sprite(&self, tex_index: i32) -> [ArraySpriteVertex; 4] {
        let c = self.corners();
        std::array::from_fn(|i| ArraySpriteVertex {
            position: c[i],
            tex_coords: CORNER_UVS[i],
            tex_index,
        })
    }
}
