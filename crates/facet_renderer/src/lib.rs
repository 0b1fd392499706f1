//! `facet_renderer` — GPU mesh resources and the drawable contract for the
//! Facet engine.
//!
//! # Module layout
//!
//! | Module       | Responsibility                                        |
//! |--------------|-------------------------------------------------------|
//! | `context`    | `EngineContext`: wgpu instance/adapter/device/queue   |
//! | `drawable`   | The `Drawable` trait (`load` / `draw` / `unload`)     |
//! | `mesh`       | `GpuMesh`: device buffers built from `MeshBuffers`    |
//! | `state`      | `RenderState`: per-frame render context               |
//! | `pipeline`   | Bind-group `Layouts` + compiled `ScenePipelines`      |
//! | `resources`  | Buffer creation helpers, `TransformBuffer`            |
//! | `geometry`   | Vertex layout, procedural primitives                  |
//! | `appearance` | State-only nodes: `FlatColor`, `DepthBias`            |
//!
//! The scene-graph traversal, camera math and window/event loop live with
//! the embedding application; they reach this crate only through
//! [`RenderState`] and the [`Drawable`] contract.

pub mod appearance;
pub mod context;
pub mod drawable;
pub mod geometry;
pub mod mesh;
pub mod pipeline;
pub mod resources;
pub mod state;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use glam;

pub use facet_core::{Color, MeshBuffers, Vertex};

pub use appearance::{DepthBias, FlatColor};
pub use context::EngineContext;
pub use drawable::Drawable;
pub use mesh::{GpuMesh, MeshError};
pub use pipeline::{Layouts, ScenePipelines};
pub use resources::transform_buffer::TransformBuffer;
pub use state::RenderState;
