//! Shared camera state.
//!
//! Every pipeline reads the same `CameraUniform` at group 0, binding 0 and
//! transforms `position` by `view_proj`. `position` is part of the layout but
//! no current shader reads it.

mod camera2d;
mod uniform;

pub use camera2d::Camera2d;
pub use uniform::CameraUniform;

pub use crate::render::{CameraBuffer, CAMERA_BINDING};
