/// Dynamic uniform buffer of per-node model matrices.
///
/// The scene traversal owns one of these: each node that draws geometry
/// gets a slot, the whole buffer is bound once at group(1), and each draw
/// call supplies `offset(slot)` as the dynamic offset:
///
/// ```text
/// state.set_transform(&transforms, slot);   // once per node
/// ```
///
/// so switching transforms never switches bind groups.
///
/// ## Alignment
///
/// wgpu requires each dynamic-offset element to be aligned to
/// `min_uniform_buffer_offset_alignment` (typically 256 bytes on desktop,
/// 64 on some mobile GPUs). Each matrix slot is therefore
/// `align_up(64, alignment)` bytes even though only 64 are used.
use std::sync::Arc;

use wgpu::util::DeviceExt;

/// One slot carries a `mat4x4<f32>`.
const MAT4_SIZE: u64 = 64;

pub struct TransformBuffer {
    pub buffer: wgpu::Buffer,
    /// Single bind group referencing the whole buffer with a dynamic offset.
    pub bind_group: Arc<wgpu::BindGroup>,
    /// Byte stride between consecutive slots (≥ 64, multiple of alignment).
    pub stride: u32,
    capacity: usize,
}

impl TransformBuffer {
    /// Creates a `TransformBuffer` holding at least `initial_capacity`
    /// slots, all prefilled with the identity matrix.
    ///
    /// `layout` must be the model bind-group layout
    /// ([`crate::pipeline::Layouts::model`]).
    pub fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        initial_capacity: usize,
    ) -> Self {
        let alignment = device.limits().min_uniform_buffer_offset_alignment;
        let stride = align_up(MAT4_SIZE as u32, alignment);

        let capacity = initial_capacity.max(1);
        let buffer = Self::create_buffer(device, capacity, stride);
        let bind_group = Self::create_bind_group(device, layout, &buffer);

        Self {
            buffer,
            bind_group: Arc::new(bind_group),
            stride,
            capacity,
        }
    }

    /// Byte offset of `slot` within the buffer.
    #[inline]
    pub fn offset(&self, slot: usize) -> u32 {
        (slot as u32).wrapping_mul(self.stride)
    }

    /// Number of slots currently allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Writes `matrix` into `slot`.
    ///
    /// Panics in debug builds if `slot >= capacity`.
    #[inline]
    pub fn write(&self, queue: &wgpu::Queue, slot: usize, matrix: &glam::Mat4) {
        debug_assert!(slot < self.capacity, "TransformBuffer slot out of range");
        queue.write_buffer(
            &self.buffer,
            self.offset(slot) as u64,
            bytemuck::cast_slice(&[matrix.to_cols_array()]),
        );
    }

    /// Ensures at least `needed` slots exist.
    ///
    /// When the capacity is insufficient the buffer and bind group are
    /// reallocated (capacity doubles until sufficient); callers must
    /// rewrite slot contents and re-record anything referencing the old
    /// bind group.
    pub fn ensure_capacity(
        &mut self,
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        needed: usize,
    ) {
        if needed <= self.capacity {
            return;
        }
        let mut new_cap = self.capacity;
        while new_cap < needed {
            new_cap *= 2;
        }
        self.buffer = Self::create_buffer(device, new_cap, self.stride);
        self.bind_group = Arc::new(Self::create_bind_group(device, layout, &self.buffer));
        self.capacity = new_cap;
    }

    // ── Private helpers ──────────────────────────────────────────────────────

    fn create_buffer(device: &wgpu::Device, capacity: usize, stride: u32) -> wgpu::Buffer {
        let size = capacity as u64 * stride as u64;
        // Identity-fill so a slot the traversal never wrote still draws.
        let identity = glam::Mat4::IDENTITY.to_cols_array();
        let mut data = vec![0u8; size as usize];
        for slot in 0..capacity {
            let off = slot * stride as usize;
            data[off..off + MAT4_SIZE as usize].copy_from_slice(bytemuck::cast_slice(&identity));
        }
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("TransformBuffer"),
            contents: &data,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        })
    }

    fn create_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        buffer: &wgpu::Buffer,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("TransformBuffer BindGroup"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer,
                    offset: 0,
                    // Size of one slot (the window the shader sees).
                    size: wgpu::BufferSize::new(MAT4_SIZE),
                }),
            }],
        })
    }
}

/// Round `value` up to the next multiple of `alignment` (a power of two).
#[inline]
fn align_up(value: u32, alignment: u32) -> u32 {
    (value + alignment - 1) & !(alignment - 1)
}

#[cfg(test)]
mod tests {
    use super::align_up;

    #[test]
    fn align_up_rounds_to_power_of_two_multiples() {
        assert_eq!(align_up(64, 256), 256);
        assert_eq!(align_up(256, 256), 256);
        assert_eq!(align_up(257, 256), 512);
        assert_eq!(align_up(64, 64), 64);
    }
}
