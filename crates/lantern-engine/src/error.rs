use crate::render::{PipelineKind, TextureKind};

/// Host-side validation failures.
///
/// Nothing in a shader can report an error, so every check the GPU would
/// otherwise fail silently on happens here, before resources are bound.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    #[error("invalid shading config: {0}")]
    InvalidShading(&'static str),

    #[error("{kind:?} pipeline needs a {expected:?} texture binding, got {found:?}")]
    BindingMismatch {
        kind: PipelineKind,
        expected: Option<TextureKind>,
        found: Option<TextureKind>,
    },

    #[error("texture size {width}x{height} has no texels")]
    EmptyTexture { width: u32, height: u32 },

    #[error("texture array needs at least one layer")]
    NoLayers,

    #[error("texture array has {count} layer(s), needs at least {min}")]
    TooFewLayers { count: usize, min: u32 },

    #[error("texture size {width}x{height} exceeds device limit {max}")]
    TextureTooLarge { width: u32, height: u32, max: u32 },

    #[error("texture array has {count} layers, device allows {max}")]
    TooManyLayers { count: usize, max: u32 },

    #[error("layer {layer} is {len} bytes, expected {expected} ({width}x{height} RGBA8)")]
    LayerSizeMismatch {
        layer: usize,
        len: usize,
        expected: usize,
        width: u32,
        height: u32,
    },

    #[error("texture layer {layer} out of range (array has {count} layers)")]
    LayerOutOfRange { layer: u32, count: u32 },

    #[error("no texture layer named {key}")]
    UnknownLayer { key: String },

    #[error("texture layer {key} listed twice")]
    DuplicateLayer { key: String },

    #[error("batch is full ({capacity} quads)")]
    BatchFull { capacity: usize },
}

pub type Result<T> = std::result::Result<T, RenderError>;
