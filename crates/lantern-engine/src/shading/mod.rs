//! Shading parameters and host-side mirrors of the fragment stages.
//!
//! The functions in this module compute exactly what the WGSL fragment
//! stages compute, so callers can answer "what will this pixel look like"
//! (hit testing a circular sprite, sizing a shadow) without a GPU.

mod config;
mod reference;

pub use config::ShadingConfig;
pub use reference::{
    array_sprite_fragment, flat_color_fragment, masked_sprite_fragment, recenter,
    smoothstep, soft_circle_alpha, soft_circle_fragment, FragmentOutcome,
};
