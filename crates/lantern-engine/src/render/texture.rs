//! Group-1 texture resources built from raw RGBA8 pixels.
//!
//! Decoding and atlas packing belong to the caller; these helpers only upload
//! tightly packed `width * height * 4` byte layers.

use crate::error::{RenderError, Result};

use super::binding::{TextureLayers, SAMPLER_BINDING, TEXTURE_BINDING};
use super::{PipelineSet, RenderCtx, TextureKind};

const BYTES_PER_TEXEL: u32 = 4;
const TEXEL_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

/// Sampler settings for sprite textures.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SamplerConfig {
    pub filter: wgpu::FilterMode,
    pub address_mode: wgpu::AddressMode,
}

impl Default for SamplerConfig {
    /// Pixel-art defaults: nearest filtering, clamped edges.
    fn default() -> Self {
        Self {
            filter: wgpu::FilterMode::Nearest,
            address_mode: wgpu::AddressMode::ClampToEdge,
        }
    }
}

impl SamplerConfig {
    fn create(&self, device: &wgpu::Device, label: &str) -> wgpu::Sampler {
        device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(label),
            address_mode_u: self.address_mode,
            address_mode_v: self.address_mode,
            address_mode_w: self.address_mode,
            mag_filter: self.filter,
            min_filter: self.filter,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        })
    }
}

/// Fewest layers an array texture may have. The GL backend cannot view a
/// single-layer texture as `D2Array`; sampling it reads opaque black.
pub const MIN_ARRAY_LAYERS: u32 = 2;

/// Size and layer bounds a texture upload must fit.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TextureLimits {
    pub min_layers: u32,
    pub max_layers: u32,
    pub max_dimension: u32,
}

impl TextureLimits {
    /// Bounds for `kind` on a device with `limits`.
    pub fn for_kind(kind: TextureKind, limits: &wgpu::Limits) -> Self {
        let (min_layers, max_layers) = match kind {
            TextureKind::D2 => (1, 1),
            TextureKind::D2Array => (MIN_ARRAY_LAYERS, limits.max_texture_array_layers),
        };
        Self {
            min_layers,
            max_layers,
            max_dimension: limits.max_texture_dimension_2d,
        }
    }
}

/// Checks texture input before anything touches the GPU.
///
/// Every layer must be exactly `width * height * 4` bytes, both sides must
/// fit `max_dimension`, and the layer count must lie within the limits.
pub fn validate_layers(width: u32, height: u32, layers: &[&[u8]], limits: &TextureLimits) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(RenderError::EmptyTexture { width, height });
    }
    if width > limits.max_dimension || height > limits.max_dimension {
        return Err(RenderError::TextureTooLarge { width, height, max: limits.max_dimension });
    }
    if layers.is_empty() {
        return Err(RenderError::NoLayers);
    }
    if layers.len() < limits.min_layers as usize {
        return Err(RenderError::TooFewLayers { count: layers.len(), min: limits.min_layers });
    }
    if layers.len() > limits.max_layers as usize {
        return Err(RenderError::TooManyLayers { count: layers.len(), max: limits.max_layers });
    }

    let expected = width as usize * height as usize * BYTES_PER_TEXEL as usize;
    for (layer, data) in layers.iter().enumerate() {
        if data.len() != expected {
            return Err(RenderError::LayerSizeMismatch {
                layer,
                len: data.len(),
                expected,
                width,
                height,
            });
        }
    }
    Ok(())
}

/// An uploaded texture with its sampler and group-1 bind group.
pub struct TextureBinding {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
    bind_group: wgpu::BindGroup,
    kind: TextureKind,
    layers: TextureLayers,
    width: u32,
    height: u32,
}

impl TextureBinding {
    /// Single 2D texture for the masked-sprite pipeline.
    pub fn sprite(
        ctx: &RenderCtx<'_>,
        set: &PipelineSet,
        label: &str,
        width: u32,
        height: u32,
        rgba: &[u8],
        sampler: &SamplerConfig,
    ) -> Result<Self> {
        Self::upload(ctx, set, TextureKind::D2, label, width, height, &[rgba], sampler)
    }

    /// Layered texture for the array-sprite pipeline. Layer `i` of `layers`
    /// is addressed by `tex_index == i`; at least [`MIN_ARRAY_LAYERS`] are
    /// required.
    pub fn sprite_array(
        ctx: &RenderCtx<'_>,
        set: &PipelineSet,
        label: &str,
        width: u32,
        height: u32,
        layers: &[&[u8]],
        sampler: &SamplerConfig,
    ) -> Result<Self> {
        Self::upload(ctx, set, TextureKind::D2Array, label, width, height, layers, sampler)
    }

    #[allow(clippy::too_many_arguments)]
    fn upload(
        ctx: &RenderCtx<'_>,
        set: &PipelineSet,
        kind: TextureKind,
        label: &str,
        width: u32,
        height: u32,
        layers: &[&[u8]],
        sampler: &SamplerConfig,
    ) -> Result<Self> {
        let limits = TextureLimits::for_kind(kind, &ctx.device.limits());
        validate_layers(width, height, layers, &limits)?;

        // Bounded by `limits.max_layers` above.
        let count = layers.len() as u32;
        log::debug!("uploading {label}: {width}x{height}, {count} layer(s)");

        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: count,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: TEXEL_FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        for (z, data) in (0u32..).zip(layers) {
            ctx.queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: &texture,
                    mip_level: 0,
                    origin: wgpu::Origin3d { x: 0, y: 0, z },
                    aspect: wgpu::TextureAspect::All,
                },
                data,
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(BYTES_PER_TEXEL * width),
                    rows_per_image: Some(height),
                },
                wgpu::Extent3d { width, height, depth_or_array_layers: 1 },
            );
        }

        let view = texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some(label),
            dimension: Some(kind.view_dimension()),
            ..Default::default()
        });
        let sampler = sampler.create(ctx.device, label);

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: set.texture_layout(kind),
            entries: &[
                wgpu::BindGroupEntry {
                    binding: TEXTURE_BINDING.binding,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: SAMPLER_BINDING.binding,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        Ok(Self {
            texture,
            view,
            sampler,
            bind_group,
            kind,
            layers: TextureLayers::new(count),
            width,
            height,
        })
    }

    #[inline]
    pub fn kind(&self) -> TextureKind {
        self.kind
    }

    /// Layer count, for validating `tex_index` values before upload.
    #[inline]
    pub fn layers(&self) -> TextureLayers {
        self.layers
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn texture(&self) -> &wgpu::Texture {
        &self.texture
    }

    #[inline]
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    #[inline]
    pub fn sampler(&self) -> &wgpu::Sampler {
        &self.sampler
    }

    #[inline]
    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_gpu;
    use crate::render::PipelineConfig;

    fn texels(w: u32, h: u32, fill: u8) -> Vec<u8> {
        vec![fill; (w * h * 4) as usize]
    }

    fn limits(min_layers: u32, max_layers: u32) -> TextureLimits {
        TextureLimits { min_layers, max_layers, max_dimension: 64 }
    }

    // ── validate_layers ───────────────────────────────────────────────────

    #[test]
    fn accepts_matching_layers() {
        let a = texels(4, 2, 0);
        let b = texels(4, 2, 255);
        assert_eq!(validate_layers(4, 2, &[a.as_slice(), b.as_slice()], &limits(2, 2)), Ok(()));
    }

    #[test]
    fn rejects_zero_sized_texture() {
        let empty: &[u8] = &[];
        assert_eq!(
            validate_layers(0, 8, &[empty], &limits(1, 4)),
            Err(RenderError::EmptyTexture { width: 0, height: 8 })
        );
    }

    #[test]
    fn rejects_sides_past_device_limit() {
        let row = texels(65, 1, 0);
        assert_eq!(
            validate_layers(65, 1, &[row.as_slice()], &limits(1, 1)),
            Err(RenderError::TextureTooLarge { width: 65, height: 1, max: 64 })
        );
        assert!(validate_layers(1, 65, &[row.as_slice()], &limits(1, 1)).is_err());
    }

    #[test]
    fn rejects_missing_layers() {
        assert_eq!(validate_layers(2, 2, &[], &limits(1, 4)), Err(RenderError::NoLayers));
    }

    #[test]
    fn array_limits_require_two_layers() {
        let wgpu_limits = wgpu::Limits::downlevel_defaults();
        let array = TextureLimits::for_kind(TextureKind::D2Array, &wgpu_limits);
        assert_eq!(array.min_layers, MIN_ARRAY_LAYERS);
        assert_eq!(array.max_layers, wgpu_limits.max_texture_array_layers);
        assert_eq!(array.max_dimension, wgpu_limits.max_texture_dimension_2d);

        let a = texels(2, 2, 0);
        assert_eq!(
            validate_layers(2, 2, &[a.as_slice()], &array),
            Err(RenderError::TooFewLayers { count: 1, min: 2 })
        );
        assert_eq!(validate_layers(2, 2, &[a.as_slice(); 2], &array), Ok(()));
    }

    #[test]
    fn single_texture_limits_allow_exactly_one_layer() {
        let single = TextureLimits::for_kind(TextureKind::D2, &wgpu::Limits::downlevel_defaults());
        let a = texels(2, 2, 0);
        assert_eq!(validate_layers(2, 2, &[a.as_slice()], &single), Ok(()));
        assert!(validate_layers(2, 2, &[a.as_slice(); 2], &single).is_err());
    }

    #[test]
    fn rejects_more_layers_than_allowed() {
        let a = texels(1, 1, 0);
        assert_eq!(
            validate_layers(1, 1, &[a.as_slice(); 3], &limits(1, 2)),
            Err(RenderError::TooManyLayers { count: 3, max: 2 })
        );
    }

    #[test]
    fn reports_first_wrongly_sized_layer() {
        let good = texels(2, 2, 0);
        let short = texels(2, 1, 0);
        assert_eq!(
            validate_layers(2, 2, &[good.as_slice(), short.as_slice(), short.as_slice()], &limits(1, 8)),
            Err(RenderError::LayerSizeMismatch {
                layer: 1,
                len: 8,
                expected: 16,
                width: 2,
                height: 2,
            })
        );
    }

    #[test]
    fn default_sampler_is_nearest_clamped() {
        let s = SamplerConfig::default();
        assert_eq!(s.filter, wgpu::FilterMode::Nearest);
        assert_eq!(s.address_mode, wgpu::AddressMode::ClampToEdge);
    }

    // ── GPU ───────────────────────────────────────────────────────────────

    #[test]
    fn uploads_sprite_and_array() {
        let Some((device, queue)) = test_gpu::device() else { return };
        let ctx = RenderCtx::new(&device, &queue);
        let set = PipelineSet::new(&ctx, PipelineConfig::new(wgpu::TextureFormat::Rgba8UnormSrgb))
            .expect("pipelines build");

        let pixels = texels(8, 8, 128);
        let sprite = TextureBinding::sprite(&ctx, &set, "test sprite", 8, 8, &pixels, &SamplerConfig::default())
            .expect("sprite uploads");
        assert_eq!(sprite.kind(), TextureKind::D2);
        assert_eq!(sprite.layers().count, 1);
        assert_eq!(sprite.size(), (8, 8));

        let array = TextureBinding::sprite_array(
            &ctx,
            &set,
            "test array",
            8,
            8,
            &[pixels.as_slice(); 2],
            &SamplerConfig::default(),
        )
        .expect("two-layer array uploads");
        assert_eq!(array.kind(), TextureKind::D2Array);
        assert_eq!(array.texture().depth_or_array_layers(), 2);
        assert_eq!(array.layers().index(1), Ok(1));
        assert!(array.layers().index(2).is_err());
    }

    #[test]
    fn one_layer_array_is_rejected() {
        let Some((device, queue)) = test_gpu::device() else { return };
        let ctx = RenderCtx::new(&device, &queue);
        let set = PipelineSet::new(&ctx, PipelineConfig::new(wgpu::TextureFormat::Rgba8UnormSrgb))
            .expect("pipelines build");

        let pixels = texels(8, 8, 255);
        let err = TextureBinding::sprite_array(
            &ctx,
            &set,
            "one layer",
            8,
            8,
            &[pixels.as_slice()],
            &SamplerConfig::default(),
        );
        assert!(matches!(err, Err(RenderError::TooFewLayers { count: 1, min: MIN_ARRAY_LAYERS })));
    }

    #[test]
    fn oversized_sprite_is_rejected_before_upload() {
        let Some((device, queue)) = test_gpu::device() else { return };
        let ctx = RenderCtx::new(&device, &queue);
        let set = PipelineSet::new(&ctx, PipelineConfig::new(wgpu::TextureFormat::Rgba8UnormSrgb))
            .expect("pipelines build");

        let max = device.limits().max_texture_dimension_2d;
        let row = texels(max + 1, 1, 0);
        let err = TextureBinding::sprite(&ctx, &set, "big", max + 1, 1, &row, &SamplerConfig::default());
        assert!(matches!(err, Err(RenderError::TextureTooLarge { max: m, .. }) if m == max));
    }

    #[test]
    fn sprite_rejects_wrong_byte_count() {
        let Some((device, queue)) = test_gpu::device() else { return };
        let ctx = RenderCtx::new(&device, &queue);
        let set = PipelineSet::new(&ctx, PipelineConfig::new(wgpu::TextureFormat::Rgba8UnormSrgb))
            .expect("pipelines build");

        let short = texels(4, 4, 0);
        let err = TextureBinding::sprite(&ctx, &set, "bad", 8, 8, &short, &SamplerConfig::default());
        assert!(matches!(err, Err(RenderError::LayerSizeMismatch { layer: 0, .. })));
    }
}
