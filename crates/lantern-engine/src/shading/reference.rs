use super::ShadingConfig;

/// Result of a fragment stage that may discard.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FragmentOutcome {
    /// Color written to location 0 (and depth written, when a depth target is bound).
    Write([f32; 4]),
    /// Fragment removed; neither color nor depth is touched.
    Discard,
}

/// Hermite interpolation as WGSL `smoothstep`, for `edge0 < edge1`.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Shifts a 0..1 quad coordinate so the quad centre is the origin.
#[inline]
pub fn recenter(uv: [f32; 2]) -> [f32; 2] {
    [uv[0] - 0.5, uv[1] - 0.5]
}

#[inline]
fn length(v: [f32; 2]) -> f32 {
    (v[0] * v[0] + v[1] * v[1]).sqrt()
}

#[inline]
pub fn flat_color_fragment(color: [f32; 4]) -> [f32; 4] {
    color
}

/// Soft-circle opacity for a re-centred uv.
///
/// `t` is twice the distance from the centre, so the quad's inscribed circle
/// has `t = 1`. Opacity holds at `shadow_opacity` up to `inner_radius` and
/// falls to exactly 0 at `outer_radius`.
pub fn soft_circle_alpha(uv: [f32; 2], cfg: &ShadingConfig) -> f32 {
    let t = 2.0 * length(uv);
    cfg.shadow_opacity * (1.0 - smoothstep(cfg.inner_radius, cfg.outer_radius, t))
}

/// Soft-circle output: always black, alpha from [`soft_circle_alpha`].
#[inline]
pub fn soft_circle_fragment(uv: [f32; 2], cfg: &ShadingConfig) -> [f32; 4] {
    [0.0, 0.0, 0.0, soft_circle_alpha(uv, cfg)]
}

/// Masked-sprite output for a re-centred uv and the texel sampled there.
///
/// On or outside `mask_radius` the alpha is forced to 0; rgb is left alone.
pub fn masked_sprite_fragment(uv: [f32; 2], sampled: [f32; 4], cfg: &ShadingConfig) -> [f32; 4] {
    let mut color = sampled;
    if length(uv) >= cfg.mask_radius {
        color[3] = 0.0;
    }
    color
}

/// Texture-array sprite output: discard on exactly zero alpha, else pass through.
#[inline]
pub fn array_sprite_fragment(sampled: [f32; 4]) -> FragmentOutcome {
    if sampled[3] == 0.0 {
        FragmentOutcome::Discard
    } else {
        FragmentOutcome::Write(sampled)
    }
}
