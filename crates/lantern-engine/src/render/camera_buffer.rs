use wgpu::util::DeviceExt;

use crate::camera::CameraUniform;

use super::binding::CAMERA_BINDING;
use super::RenderCtx;

/// GPU copy of the camera uniform plus its group-0 bind group.
///
/// One instance is shared by every pipeline in a frame.
pub struct CameraBuffer {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    last: CameraUniform,
    warned_non_finite: bool,
}

impl CameraBuffer {
    pub fn new(
        ctx: &RenderCtx<'_>,
        layout: &wgpu::BindGroupLayout,
        label: &str,
        uniform: &CameraUniform,
    ) -> Self {
        log::debug!("creating camera buffer {label}");

        let buffer = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::bytes_of(uniform),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: CAMERA_BINDING.binding,
                resource: buffer.as_entire_binding(),
            }],
        });

        Self {
            buffer,
            bind_group,
            last: *uniform,
            warned_non_finite: false,
        }
    }

    /// Uploads `uniform` if it differs from the last upload.
    ///
    /// Returns `true` when a write was queued.
    pub fn write(&mut self, queue: &wgpu::Queue, uniform: &CameraUniform) -> bool {
        if *uniform == self.last {
            return false;
        }

        if !uniform.is_finite() && !self.warned_non_finite {
            log::warn!("camera uniform has non-finite components; geometry will not rasterize");
            self.warned_non_finite = true;
        }

        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(uniform));
        self.last = *uniform;
        true
    }

    #[inline]
    pub fn uniform(&self) -> &CameraUniform {
        &self.last
    }

    #[inline]
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    #[inline]
    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::binding::camera_bind_group_layout;
    use crate::render::test_gpu;

    #[test]
    fn skips_unchanged_uploads() {
        let Some((device, queue)) = test_gpu::device() else { return };
        let ctx = RenderCtx::new(&device, &queue);
        let layout = camera_bind_group_layout(&device);

        let start = CameraUniform::canvas(800, 600);
        let mut camera = CameraBuffer::new(&ctx, &layout, "test camera", &start);
        assert_eq!(camera.buffer().size(), CameraUniform::SIZE);
        assert_eq!(*camera.uniform(), start);

        assert!(!camera.write(&queue, &start));

        let moved = CameraUniform::canvas(1024, 768);
        assert!(camera.write(&queue, &moved));
        assert_eq!(*camera.uniform(), moved);
        assert!(!camera.write(&queue, &moved));
    }
}
