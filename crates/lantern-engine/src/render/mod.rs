//! GPU side of the renderer.
//!
//! Four pipelines share one camera bind group (group 0). Textured pipelines
//! add a texture + sampler at group 1. Everything here borrows the device and
//! queue through [`RenderCtx`]; surfaces, frames and render passes belong to
//! the host application.
//!
//! Convention:
//! - world space is +Y up; the camera uniform maps it to clip space.
//! - each vertex type names its pipeline through [`Vertex::KIND`](crate::vertex::Vertex::KIND).

mod batch;
mod binding;
mod camera_buffer;
mod ctx;
mod layer_map;
mod pipeline;
pub mod shaders;
mod texture;

#[cfg(test)]
mod test_gpu;

pub use batch::{BufferUsage, GpuBatch, QuadBatch, MAX_QUADS};
pub use binding::{
    camera_bind_group_layout, texture_bind_group_layout, BindPoint, TextureKind, TextureLayers,
    CAMERA_BINDING, SAMPLER_BINDING, TEXTURE_BINDING,
};
pub use camera_buffer::CameraBuffer;
pub use ctx::RenderCtx;
pub use layer_map::LayerMap;
pub use pipeline::{PipelineConfig, PipelineKind, PipelineSet};
pub use texture::{validate_layers, SamplerConfig, TextureBinding, TextureLimits, MIN_ARRAY_LAYERS};
