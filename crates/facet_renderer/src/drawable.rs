/// The drawable resource contract: every renderable resource (imported
/// mesh or procedural shape) and every state-only appearance node plugs
/// into the external scene graph through this trait.
///
/// ## Traversal discipline
/// The traversal calls `load` before a node's subtree is drawn and
/// `unload` after it, forming an implicit save/restore pair around the
/// subtree's `draw` calls. No ordering beyond load-before-draw-before-
/// unload is assumed.
///
/// ## Optional hooks
/// `load` and `unload` default to no-ops so plain geometry resources only
/// implement `draw`.
use crate::state::RenderState;

pub trait Drawable {
    /// Applies render-state side effects (material, depth bias) for the
    /// owning node's subtree.
    #[allow(unused_variables)]
    fn load(&self, state: &mut RenderState) {}

    /// Issues the geometry draw using whatever is currently bound in
    /// `state`. Must be a no-op, never an error, when the resource has
    /// no geometry.
    fn draw(&self, state: &mut RenderState);

    /// Reverses the side effects applied by `load`.
    #[allow(unused_variables)]
    fn unload(&self, state: &mut RenderState) {}
}
