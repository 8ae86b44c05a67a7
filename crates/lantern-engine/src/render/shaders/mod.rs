//! WGSL sources, one module per pipeline.
//!
//! Every module is the shared camera prelude (`camera.wgsl`: the `Camera`
//! struct at group 0 / binding 0 and `to_clip`) followed by the pipeline body.
//! Entry points are always `vs_main` and `fs_main`.

pub const VS_ENTRY: &str = "vs_main";
pub const FS_ENTRY: &str = "fs_main";

/// Camera struct, binding and `to_clip`.
pub const CAMERA_PRELUDE: &str = include_str!("camera.wgsl");

pub const FLAT_COLOR: &str = concat!(include_str!("camera.wgsl"), include_str!("flat_color.wgsl"));

pub const SOFT_CIRCLE: &str = concat!(include_str!("camera.wgsl"), include_str!("soft_circle.wgsl"));

pub const MASKED_SPRITE: &str =
    concat!(include_str!("camera.wgsl"), include_str!("masked_sprite.wgsl"));

pub const ARRAY_SPRITE: &str =
    concat!(include_str!("camera.wgsl"), include_str!("array_sprite.wgsl"));
