//! Lantern engine crate.
//!
//! A small 2D rendering core on wgpu: one shared camera uniform, four
//! pipelines (flat color, soft circle, masked sprite, texture-array sprite),
//! their vertex formats, and the group/binding convention that lets them share
//! a frame. Device, surface and frame ownership stay with the host.

pub mod camera;
pub mod error;
pub mod logging;
pub mod render;
pub mod shading;
pub mod vertex;

pub use error::{RenderError, Result};
