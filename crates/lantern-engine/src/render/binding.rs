//! Group/slot convention shared by every pipeline.
//!
//! - group 0: camera uniform (all pipelines)
//! - group 1: texture at binding 0, sampler at binding 1 (textured pipelines only)

use crate::camera::CameraUniform;
use crate::error::{RenderError, Result};

/// A `(group, binding)` pair in the shader resource interface.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BindPoint {
    pub group: u32,
    pub binding: u32,
}

impl BindPoint {
    #[inline]
    pub const fn new(group: u32, binding: u32) -> Self {
        Self { group, binding }
    }
}

pub const CAMERA_BINDING: BindPoint = BindPoint::new(0, 0);
pub const TEXTURE_BINDING: BindPoint = BindPoint::new(1, 0);
pub const SAMPLER_BINDING: BindPoint = BindPoint::new(1, 1);

/// Texture shapes a pipeline can bind at group 1.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TextureKind {
    /// Single 2D texture (masked sprites).
    D2,
    /// 2D texture array indexed per vertex (batched sprites).
    D2Array,
}

impl TextureKind {
    pub const ALL: [TextureKind; 2] = [TextureKind::D2, TextureKind::D2Array];

    pub fn view_dimension(self) -> wgpu::TextureViewDimension {
        match self {
            TextureKind::D2 => wgpu::TextureViewDimension::D2,
            TextureKind::D2Array => wgpu::TextureViewDimension::D2Array,
        }
    }

    fn label(self) -> &'static str {
        match self {
            TextureKind::D2 => "lantern texture bgl",
            TextureKind::D2Array => "lantern texture array bgl",
        }
    }
}

/// Layer count of a bound texture array.
///
/// Shaders sample whatever layer index they are given; out-of-range indices
/// are undefined on the GPU, so they are rejected here before upload.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TextureLayers {
    pub count: u32,
}

impl TextureLayers {
    #[inline]
    pub const fn new(count: u32) -> Self {
        Self { count }
    }

    /// Converts a layer number to the `tex_index` vertex value.
    pub fn index(self, layer: u32) -> Result<i32> {
        if layer >= self.count {
            return Err(RenderError::LayerOutOfRange { layer, count: self.count });
        }
        i32::try_from(layer).map_err(|_| RenderError::LayerOutOfRange { layer, count: self.count })
    }

    #[inline]
    pub fn contains(self, tex_index: i32) -> bool {
        u32::try_from(tex_index).is_ok_and(|l| l < self.count)
    }
}

/// Minimum binding size for the camera uniform.
pub(crate) fn camera_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(CameraUniform::SIZE)
        .expect("CameraUniform has non-zero size by construction")
}

/// Group 0 layout: camera uniform, vertex stage only.
pub fn camera_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("lantern camera bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: CAMERA_BINDING.binding,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: Some(camera_min_binding_size()),
            },
            count: None,
        }],
    })
}

/// Group 1 layout: filterable float texture of `kind` plus a filtering sampler.
pub fn texture_bind_group_layout(device: &wgpu::Device, kind: TextureKind) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(kind.label()),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: TEXTURE_BINDING.binding,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: kind.view_dimension(),
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: SAMPLER_BINDING.binding,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    })
}
