/// Per-frame render context handed down the external scene traversal.
///
/// Wraps the frame's open `wgpu::RenderPass` together with the mutable
/// state the appearance nodes toggle: the current material bind group and
/// the depth-bias pipeline variant. The traversal passes one
/// `RenderState` down the tree; `load`/`unload` pairs around a subtree
/// form the save/restore discipline.
///
/// Construction binds the standard pipeline, the camera at group(0) and
/// the default material at group(2); the traversal must select a
/// transform slot ([`RenderState::set_transform`]) before the first draw.
use crate::pipeline::ScenePipelines;
use crate::resources::TransformBuffer;

pub struct RenderState<'a> {
    pass: wgpu::RenderPass<'a>,
    queue: &'a wgpu::Queue,
    pipelines: &'a ScenePipelines,
    depth_bias: bool,
}

impl<'a> RenderState<'a> {
    pub fn new(
        mut pass: wgpu::RenderPass<'a>,
        queue: &'a wgpu::Queue,
        pipelines: &'a ScenePipelines,
        camera: &wgpu::BindGroup,
    ) -> Self {
        pass.set_pipeline(&pipelines.standard);
        pass.set_bind_group(0, camera, &[]);
        pass.set_bind_group(2, &pipelines.default_material, &[]);
        Self {
            pass,
            queue,
            pipelines,
            depth_bias: false,
        }
    }

    /// Queue handle for load-time uniform updates.
    #[inline]
    pub fn queue(&self) -> &wgpu::Queue {
        self.queue
    }

    // ── State toggles (appearance nodes) ──────────────────────────────────

    /// Makes `material` the group(2) binding for subsequent draws.
    pub fn set_material(&mut self, material: &wgpu::BindGroup) {
        self.pass.set_bind_group(2, material, &[]);
    }

    /// Restores the default (opaque white) material.
    pub fn clear_material(&mut self) {
        self.pass.set_bind_group(2, &self.pipelines.default_material, &[]);
    }

    /// Switches between the standard and depth-biased pipeline variants.
    /// Redundant toggles are free; the pipeline is only re-bound on an
    /// actual change.
    pub fn set_depth_bias(&mut self, enabled: bool) {
        if self.depth_bias == enabled {
            return;
        }
        self.depth_bias = enabled;
        let pipeline = if enabled {
            &self.pipelines.biased
        } else {
            &self.pipelines.standard
        };
        self.pass.set_pipeline(pipeline);
    }

    /// Current depth-bias flag.
    #[inline]
    pub fn depth_bias(&self) -> bool {
        self.depth_bias
    }

    /// Binds `transforms` slot `slot` as the group(1) model matrix.
    pub fn set_transform(&mut self, transforms: &TransformBuffer, slot: usize) {
        self.pass
            .set_bind_group(1, &*transforms.bind_group, &[transforms.offset(slot)]);
    }

    // ── Draw ──────────────────────────────────────────────────────────────

    /// Issues one indexed draw over `index_count` u32 indices using
    /// whatever pipeline, camera, transform and material are currently
    /// bound.
    pub fn draw_indexed(
        &mut self,
        vertex_buffer: &wgpu::Buffer,
        index_buffer: &wgpu::Buffer,
        index_count: u32,
    ) {
        self.pass.set_vertex_buffer(0, vertex_buffer.slice(..));
        self.pass
            .set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.pass.draw_indexed(0..index_count, 0, 0..1);
    }
}
