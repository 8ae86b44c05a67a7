use crate::error::{RenderError, Result};

/// Tunable constants for the analytic shading paths.
///
/// Passed to the shaders as pipeline-overridable constants when the
/// pipelines are built.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShadingConfig {
    /// Soft-circle opacity at the centre. Below 1 so shadows read as partial occlusion.
    pub shadow_opacity: f32,

    /// Soft-circle distance (0..1 across the radius) up to which opacity stays at `shadow_opacity`.
    pub inner_radius: f32,

    /// Soft-circle distance at which opacity reaches zero.
    pub outer_radius: f32,

    /// Masked-sprite cutout radius in re-centred uv units (0.5 = inscribed circle).
    pub mask_radius: f32,
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self {
            shadow_opacity: 0.5,
            inner_radius: 0.1,
            outer_radius: 1.0,
            mask_radius: 0.5,
        }
    }
}

impl ShadingConfig {
    pub fn validate(&self) -> Result<()> {
        let all = [self.shadow_opacity, self.inner_radius, self.outer_radius, self.mask_radius];
        if !all.iter().all(|v| v.is_finite()) {
            return Err(RenderError::InvalidShading("values must be finite"));
        }
        if !(0.0..=1.0).contains(&self.shadow_opacity) {
            return Err(RenderError::InvalidShading("shadow_opacity must be within 0..=1"));
        }
        if self.inner_radius < 0.0 {
            return Err(RenderError::InvalidShading("inner_radius must be >= 0"));
        }
        if self.inner_radius >= self.outer_radius {
            return Err(RenderError::InvalidShading("inner_radius must be below outer_radius"));
        }
        if self.mask_radius <= 0.0 {
            return Err(RenderError::InvalidShading("mask_radius must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = ShadingConfig::default();
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!((cfg.shadow_opacity, cfg.inner_radius, cfg.outer_radius), (0.5, 0.1, 1.0));
        assert_eq!(cfg.mask_radius, 0.5);
    }

    #[test]
    fn inverted_radii_rejected() {
        let cfg = ShadingConfig { inner_radius: 1.0, outer_radius: 0.5, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(RenderError::InvalidShading(_))));
    }

    #[test]
    fn equal_radii_rejected() {
        let cfg = ShadingConfig { inner_radius: 0.5, outer_radius: 0.5, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn opacity_above_one_rejected() {
        let cfg = ShadingConfig { shadow_opacity: 1.5, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn nan_rejected() {
        let cfg = ShadingConfig { mask_radius: f32::NAN, ..Default::default() };
        assert_eq!(cfg.validate(), Err(RenderError::InvalidShading("values must be finite")));
    }

    #[test]
    fn zero_mask_radius_rejected() {
        let cfg = ShadingConfig { mask_radius: 0.0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }
}
