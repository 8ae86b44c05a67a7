use crate::error::{RenderError, Result};
use crate::shading::ShadingConfig;
use crate::vertex::{ArraySpriteVertex, ColorVertex, ShadowVertex, SpriteVertex, Vertex};

use super::binding::{camera_bind_group_layout, texture_bind_group_layout, CAMERA_BINDING, TEXTURE_BINDING};
use super::shaders::{self, FS_ENTRY, VS_ENTRY};
use super::{CameraBuffer, RenderCtx, TextureBinding, TextureKind};

/// The four draw kinds.
///
/// Each kind is a vertex/fragment pair with its own vertex format. All of
/// them read the camera at group 0; the sprite kinds also bind a texture at
/// group 1.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PipelineKind {
    /// Untextured geometry colored per vertex (debug overlays, UI).
    FlatColor,
    /// Analytic soft black disc (shadows).
    SoftCircle,
    /// 2D texture cut to a circle inscribed in the quad.
    MaskedSprite,
    /// Texture-array sprite with hard alpha discard (batched sprites).
    ArraySprite,
}

impl PipelineKind {
    pub const ALL: [PipelineKind; 4] = [
        PipelineKind::FlatColor,
        PipelineKind::SoftCircle,
        PipelineKind::MaskedSprite,
        PipelineKind::ArraySprite,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            PipelineKind::FlatColor => "lantern flat color pipeline",
            PipelineKind::SoftCircle => "lantern soft circle pipeline",
            PipelineKind::MaskedSprite => "lantern masked sprite pipeline",
            PipelineKind::ArraySprite => "lantern array sprite pipeline",
        }
    }

    pub fn shader_source(self) -> &'static str {
        match self {
            PipelineKind::FlatColor => shaders::FLAT_COLOR,
            PipelineKind::SoftCircle => shaders::SOFT_CIRCLE,
            PipelineKind::MaskedSprite => shaders::MASKED_SPRITE,
            PipelineKind::ArraySprite => shaders::ARRAY_SPRITE,
        }
    }

    pub fn vertex_layout(self) -> wgpu::VertexBufferLayout<'static> {
        match self {
            PipelineKind::FlatColor => ColorVertex::layout(),
            PipelineKind::SoftCircle => ShadowVertex::layout(),
            PipelineKind::MaskedSprite => SpriteVertex::layout(),
            PipelineKind::ArraySprite => ArraySpriteVertex::layout(),
        }
    }

    /// Texture expected at group 1, if any.
    pub fn texture_kind(self) -> Option<TextureKind> {
        match self {
            PipelineKind::FlatColor | PipelineKind::SoftCircle => None,
            PipelineKind::MaskedSprite => Some(TextureKind::D2),
            PipelineKind::ArraySprite => Some(TextureKind::D2Array),
        }
    }

    /// Only the discarding kind writes depth.
    pub fn writes_depth(self) -> bool {
        matches!(self, PipelineKind::ArraySprite)
    }

    /// Pipeline-overridable constants for this kind's shader.
    pub fn overrides(self, shading: &ShadingConfig) -> Vec<(&'static str, f64)> {
        match self {
            PipelineKind::SoftCircle => vec![
                ("shadow_opacity", f64::from(shading.shadow_opacity)),
                ("inner_radius", f64::from(shading.inner_radius)),
                ("outer_radius", f64::from(shading.outer_radius)),
            ],
            PipelineKind::MaskedSprite => vec![("mask_radius", f64::from(shading.mask_radius))],
            PipelineKind::FlatColor | PipelineKind::ArraySprite => Vec::new(),
        }
    }

    /// Rejects a texture binding that does not match this kind.
    pub fn check_binding(self, found: Option<TextureKind>) -> Result<()> {
        let expected = self.texture_kind();
        if expected == found {
            Ok(())
        } else {
            Err(RenderError::BindingMismatch { kind: self, expected, found })
        }
    }
}

/// Build-time settings shared by all four pipelines.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PipelineConfig {
    pub color_format: wgpu::TextureFormat,

    /// Depth target format. With a depth target, every pipeline depth-tests
    /// with `LessEqual` and the array-sprite pipeline writes depth.
    pub depth_format: Option<wgpu::TextureFormat>,

    pub shading: ShadingConfig,
}

impl PipelineConfig {
    #[inline]
    pub fn new(color_format: wgpu::TextureFormat) -> Self {
        Self {
            color_format,
            depth_format: None,
            shading: ShadingConfig::default(),
        }
    }

    #[inline]
    pub fn with_depth(mut self, format: wgpu::TextureFormat) -> Self {
        self.depth_format = Some(format);
        self
    }

    #[inline]
    pub fn with_shading(mut self, shading: ShadingConfig) -> Self {
        self.shading = shading;
        self
    }
}

/// All four pipelines plus the bind group layouts they share.
///
/// One camera layout serves every pipeline and one texture layout serves each
/// texture kind, so a frame can switch kinds without rebuilding group 0.
pub struct PipelineSet {
    config: PipelineConfig,
    camera_layout: wgpu::BindGroupLayout,
    texture_layouts: [wgpu::BindGroupLayout; 2],
    pipelines: [wgpu::RenderPipeline; 4],
}

impl PipelineSet {
    pub fn new(ctx: &RenderCtx<'_>, config: PipelineConfig) -> Result<Self> {
        config.shading.validate()?;

        let camera_layout = camera_bind_group_layout(ctx.device);
        let texture_layouts = TextureKind::ALL.map(|k| texture_bind_group_layout(ctx.device, k));

        let pipelines = PipelineKind::ALL.map(|kind| {
            let texture_layout = kind.texture_kind().map(|k| &texture_layouts[texture_slot(k)]);
            create_pipeline(ctx.device, kind, &camera_layout, texture_layout, &config)
        });

        log::debug!(
            "built {} pipelines for {:?} (depth: {:?})",
            pipelines.len(),
            config.color_format,
            config.depth_format
        );

        Ok(Self {
            config,
            camera_layout,
            texture_layouts,
            pipelines,
        })
    }

    #[inline]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    #[inline]
    pub fn pipeline(&self, kind: PipelineKind) -> &wgpu::RenderPipeline {
        &self.pipelines[kind.index()]
    }

    #[inline]
    pub fn camera_layout(&self) -> &wgpu::BindGroupLayout {
        &self.camera_layout
    }

    #[inline]
    pub fn texture_layout(&self, kind: TextureKind) -> &wgpu::BindGroupLayout {
        &self.texture_layouts[texture_slot(kind)]
    }

    /// Sets the pipeline for `kind` and its bind groups on `pass`.
    ///
    /// Fails without touching `pass` if the texture does not match the kind.
    pub fn bind(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        kind: PipelineKind,
        camera: &CameraBuffer,
        texture: Option<&TextureBinding>,
    ) -> Result<()> {
        kind.check_binding(texture.map(TextureBinding::kind))?;

        pass.set_pipeline(self.pipeline(kind));
        pass.set_bind_group(CAMERA_BINDING.group, camera.bind_group(), &[]);
        if let Some(texture) = texture {
            pass.set_bind_group(TEXTURE_BINDING.group, texture.bind_group(), &[]);
        }
        Ok(())
    }
}

#[inline]
fn texture_slot(kind: TextureKind) -> usize {
    match kind {
        TextureKind::D2 => 0,
        TextureKind::D2Array => 1,
    }
}

fn create_pipeline(
    device: &wgpu::Device,
    kind: PipelineKind,
    camera_layout: &wgpu::BindGroupLayout,
    texture_layout: Option<&wgpu::BindGroupLayout>,
    config: &PipelineConfig,
) -> wgpu::RenderPipeline {
    log::debug!("creating {}", kind.label());

    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(kind.label()),
        source: wgpu::ShaderSource::Wgsl(kind.shader_source().into()),
    });

    let mut bind_group_layouts = vec![camera_layout];
    bind_group_layouts.extend(texture_layout);

    let layout_label = format!("{} layout", kind.label());
    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(&layout_label),
        bind_group_layouts: &bind_group_layouts,
        immediate_size: 0,
    });

    let constants = kind.overrides(&config.shading);

    let depth_stencil = config.depth_format.map(|format| wgpu::DepthStencilState {
        format,
        depth_write_enabled: kind.writes_depth(),
        depth_compare: wgpu::CompareFunction::LessEqual,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(kind.label()),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some(VS_ENTRY),
            compilation_options: wgpu::PipelineCompilationOptions {
                constants: &constants,
                ..Default::default()
            },
            buffers: &[kind.vertex_layout()],
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some(FS_ENTRY),
            compilation_options: wgpu::PipelineCompilationOptions {
                constants: &constants,
                ..Default::default()
            },
            targets: &[Some(wgpu::ColorTargetState {
                format: config.color_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}
