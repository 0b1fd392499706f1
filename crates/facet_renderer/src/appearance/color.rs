/// Flat-color appearance node.
///
/// Owns a small color uniform plus the group(2) bind group referencing
/// it, both created once at construction. `load` makes it the material
/// for the draws that follow; nothing is undone on `unload` because a
/// sibling or parent color simply overwrites the binding, and the frame
/// starts from the default material anyway.
use facet_core::Color;

use crate::drawable::Drawable;
use crate::pipeline::Layouts;
use crate::resources::buffer;
use crate::state::RenderState;

pub struct FlatColor {
    color: Color,
    uniform: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl FlatColor {
    pub fn new(device: &wgpu::Device, layouts: &Layouts, color: Color) -> Self {
        let uniform = buffer::create_uniform(device, "FlatColor", &color.to_array());
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("FlatColor BindGroup"),
            layout: &layouts.material,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform.as_entire_binding(),
            }],
        });
        Self {
            color,
            uniform,
            bind_group,
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Updates the color in place (GPU write through `queue`).
    pub fn set_color(&mut self, queue: &wgpu::Queue, color: Color) {
        self.color = color;
        buffer::update_uniform(queue, &self.uniform, &color.to_array());
    }
}

impl Drawable for FlatColor {
    fn load(&self, state: &mut RenderState) {
        state.set_material(&self.bind_group);
    }

    /// State-only node: there is no geometry to draw.
    fn draw(&self, _state: &mut RenderState) {}
}
