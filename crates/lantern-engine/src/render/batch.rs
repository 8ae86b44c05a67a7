//! Per-pipeline quad batching.
//!
//! A [`QuadBatch`] collects quads on the CPU; a [`GpuBatch`] owns the vertex
//! and index buffers and draws everything uploaded in one indexed call. The
//! vertex type fixes the pipeline, so a batch can never be drawn with the
//! wrong layout.

use std::marker::PhantomData;

use crate::error::{RenderError, Result};
use crate::vertex::{Vertex, QUAD_INDICES};

use super::{CameraBuffer, PipelineSet, RenderCtx, TextureBinding};

/// Largest quad count addressable with `u16` indices.
pub const MAX_QUADS: usize = (u16::MAX as usize + 1) / 4;

const MIN_GPU_QUADS: usize = 64;

/// Vertex and index fill against capacity, for overlays and budgeting.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BufferUsage {
    pub vertex_usage: usize,
    pub vertex_capacity: usize,
    pub index_usage: usize,
    pub index_capacity: usize,
}

impl BufferUsage {
    fn from_quads(quads: usize, quad_capacity: usize) -> Self {
        Self {
            vertex_usage: quads * 4,
            vertex_capacity: quad_capacity * 4,
            index_usage: quads * QUAD_INDICES.len(),
            index_capacity: quad_capacity * QUAD_INDICES.len(),
        }
    }

    /// Vertex fill in `0..=1`; zero when nothing is allocated.
    pub fn fraction(&self) -> f32 {
        if self.vertex_capacity == 0 {
            0.0
        } else {
            self.vertex_usage as f32 / self.vertex_capacity as f32
        }
    }
}

// ── CPU side ──────────────────────────────────────────────────────────────

/// CPU-side quads for one pipeline kind, ready for upload.
#[derive(Debug, Clone)]
pub struct QuadBatch<V: Vertex> {
    vertices: Vec<V>,
    indices: Vec<u16>,
    capacity: usize,
}

impl<V: Vertex> Default for QuadBatch<V> {
    fn default() -> Self {
        Self::with_capacity(MAX_QUADS)
    }
}

impl<V: Vertex> QuadBatch<V> {
    /// `capacity` is clamped to [`MAX_QUADS`].
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.min(MAX_QUADS);
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            capacity,
        }
    }

    /// Appends one quad (corners in [`Quad`](crate::vertex::Quad) order).
    pub fn push_quad(&mut self, quad: [V; 4]) -> Result<()> {
        if self.len() >= self.capacity {
            return Err(RenderError::BatchFull { capacity: self.capacity });
        }

        // Below MAX_QUADS, so base + 3 fits in u16.
        let base = self.vertices.len() as u16;
        self.vertices.extend_from_slice(&quad);
        self.indices.extend(QUAD_INDICES.iter().map(|i| base + i));
        Ok(())
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    /// Number of quads.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len() / 4
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn usage(&self) -> BufferUsage {
        BufferUsage::from_quads(self.len(), self.capacity)
    }

    #[inline]
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    #[inline]
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }
}

// ── GPU side ──────────────────────────────────────────────────────────────

/// Growable vertex/index buffers for one pipeline kind.
pub struct GpuBatch<V: Vertex> {
    label: String,
    vbo: Option<wgpu::Buffer>,
    ibo: Option<wgpu::Buffer>,
    quad_capacity: usize,
    index_count: u32,
    _vertex: PhantomData<V>,
}

impl<V: Vertex> GpuBatch<V> {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            vbo: None,
            ibo: None,
            quad_capacity: 0,
            index_count: 0,
            _vertex: PhantomData,
        }
    }

    /// Writes `batch` to the GPU, growing the buffers first if needed.
    pub fn upload(&mut self, ctx: &RenderCtx<'_>, batch: &QuadBatch<V>) {
        // Bounded by MAX_QUADS * 6.
        self.index_count = batch.indices().len() as u32;
        if batch.is_empty() {
            return;
        }

        self.ensure_capacity(ctx, batch.len());

        let (Some(vbo), Some(ibo)) = (self.vbo.as_ref(), self.ibo.as_ref()) else { return; };
        ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(batch.vertices()));
        ctx.queue.write_buffer(ibo, 0, bytemuck::cast_slice(batch.indices()));
    }

    /// Binds `V::KIND`'s pipeline and draws every uploaded quad.
    ///
    /// Does nothing (but still validates the binding) when the last upload
    /// was empty.
    pub fn draw(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        set: &PipelineSet,
        camera: &CameraBuffer,
        texture: Option<&TextureBinding>,
    ) -> Result<()> {
        V::KIND.check_binding(texture.map(TextureBinding::kind))?;

        let (Some(vbo), Some(ibo)) = (self.vbo.as_ref(), self.ibo.as_ref()) else { return Ok(()); };
        if self.index_count == 0 {
            return Ok(());
        }

        set.bind(pass, V::KIND, camera, texture)?;
        pass.set_vertex_buffer(0, vbo.slice(..));
        pass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint16);
        pass.draw_indexed(0..self.index_count, 0, 0..1);
        Ok(())
    }

    #[inline]
    pub fn quad_capacity(&self) -> usize {
        self.quad_capacity
    }

    #[inline]
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Uploaded quads against the allocated buffers.
    #[inline]
    pub fn usage(&self) -> BufferUsage {
        BufferUsage::from_quads(self.index_count as usize / QUAD_INDICES.len(), self.quad_capacity)
    }

    fn ensure_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.quad_capacity && self.vbo.is_some() && self.ibo.is_some() {
            return;
        }

        let new_cap = grown_capacity(required);
        log::debug!("{}: growing to {new_cap} quads", self.label);

        self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("{} vbo", self.label)),
            size: (new_cap * 4 * std::mem::size_of::<V>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.ibo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("{} ibo", self.label)),
            size: (new_cap * 6 * std::mem::size_of::<u16>()) as u64,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.quad_capacity = new_cap;
    }
}

/// Next power of two, at least [`MIN_GPU_QUADS`], at most [`MAX_QUADS`].
fn grown_capacity(required: usize) -> usize {
    required.next_power_of_two().clamp(MIN_GPU_QUADS, MAX_QUADS)
}
