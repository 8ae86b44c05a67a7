//! Per-pipeline vertex formats.
//!
//! Each pipeline has its own vertex struct; there is no shared base layout.
//! Location 0 is always `position: vec3<f32>`, location 1 is the
//! pipeline-specific attribute, and location 2 (`tex_index: i32`) exists only
//! for texture-array sprites.

mod formats;
mod quad;

pub use formats::{ArraySpriteVertex, ColorVertex, ShadowVertex, SpriteVertex, Vertex};
pub use quad::{Quad, QUAD_INDICES};
