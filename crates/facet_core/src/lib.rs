//! CPU-side core of the Facet engine: mesh data, the OBJ import pipeline,
//! and the color type shared with the renderer's material nodes.
//!
//! Nothing in this crate touches the GPU. The import pipeline produces a
//! finished [`MeshBuffers`] which `facet_renderer` uploads once and then
//! treats as immutable.

pub mod color;
pub mod mesh;
pub mod obj;

pub use color::Color;
pub use mesh::{MeshBuffers, Vertex};
