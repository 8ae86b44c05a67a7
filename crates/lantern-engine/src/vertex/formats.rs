use bytemuck::{Pod, Zeroable};

use crate::render::PipelineKind;

/// A vertex type with a fixed attribute layout, tied to the one pipeline
/// that consumes it.
pub trait Vertex: Pod + Zeroable {
    const KIND: PipelineKind;
    const ATTRIBUTES: &'static [wgpu::VertexAttribute];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: Self::ATTRIBUTES,
        }
    }
}

/// Flat-color vertex (28 bytes). `color` is straight (non-premultiplied) RGBA.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex for ColorVertex {
    const KIND: PipelineKind = PipelineKind::FlatColor;
    const ATTRIBUTES: &'static [wgpu::VertexAttribute] = &wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x4  // color
    ];
}

/// Soft-circle vertex (20 bytes). `uv` spans 0..1 across the quad.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ShadowVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex for ShadowVertex {
    const KIND: PipelineKind = PipelineKind::SoftCircle;
    const ATTRIBUTES: &'static [wgpu::VertexAttribute] = &wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x2  // uv
    ];
}

/// Masked-sprite vertex (20 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SpriteVertex {
    pub position: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl Vertex for SpriteVertex {
    const KIND: PipelineKind = PipelineKind::MaskedSprite;
    const ATTRIBUTES: &'static [wgpu::VertexAttribute] = &wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x2  // tex_coords
    ];
}

/// Texture-array sprite vertex (24 bytes).
///
/// `tex_index` selects the array layer. It is not interpolated; every vertex
/// of a quad should carry the same value.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ArraySpriteVertex {
    pub position: [f32; 3],
    pub tex_coords: [f32; 2],
    pub tex_index: i32,
}

impl Vertex for ArraySpriteVertex {
    const KIND: PipelineKind = PipelineKind::ArraySprite;
    const ATTRIBUTES: &'static [wgpu::VertexAttribute] = &wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x2, // tex_coords
        2 => Sint32     // tex_index
    ];
}
