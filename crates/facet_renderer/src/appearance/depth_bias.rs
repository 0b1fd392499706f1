/// Depth-bias appearance node: the render-state analogue of polygon
/// offset.
///
/// `load` flips the pass onto the depth-biased pipeline variant and
/// `unload` restores the standard one, bracketing the owning node's
/// subtree. The bias amounts themselves are pipeline state, configured
/// once via [`crate::pipeline::ScenePipelines::with_bias`].
use crate::drawable::Drawable;
use crate::state::RenderState;

#[derive(Debug, Default, Clone, Copy)]
pub struct DepthBias;

impl DepthBias {
    pub fn new() -> Self {
        Self
    }
}

impl Drawable for DepthBias {
    fn load(&self, state: &mut RenderState) {
        state.set_depth_bias(true);
    }

    /// State-only node: there is no geometry to draw.
    fn draw(&self, _state: &mut RenderState) {}

    fn unload(&self, state: &mut RenderState) {
        state.set_depth_bias(false);
    }
}
