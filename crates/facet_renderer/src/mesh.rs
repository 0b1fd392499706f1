/// GPU-resident mesh resource.
///
/// Owns the device-side vertex/index buffer pair built once from a
/// finished [`MeshBuffers`]. Deliberately **not** `Clone`: the buffers are
/// released exactly once, when the resource drops, and geometry changes
/// mean uploading a new resource; there is no re-upload or mutation path.
use std::path::Path;

use facet_core::{obj, MeshBuffers};
use log::warn;
use thiserror::Error;

use crate::drawable::Drawable;
use crate::resources::buffer;
use crate::state::RenderState;

#[derive(Debug, Error)]
pub enum MeshError {
    /// Building a mesh from a null/absent logical source is a caller bug,
    /// not bad input data, and fails fast.
    #[error("mesh source path is empty")]
    NullSource,
}

pub struct GpuMesh {
    /// `None` when the source carried no drawable geometry: a valid
    /// state whose draw is a no-op.
    buffers: Option<GpuBuffers>,
    vertex_count: u32,
    index_count: u32,
}

struct GpuBuffers {
    vertex: wgpu::Buffer,
    index: wgpu::Buffer,
}

impl GpuMesh {
    /// Uploads `buffers` to the device. An empty `MeshBuffers` is
    /// permitted and yields the empty resource.
    pub fn new(device: &wgpu::Device, buffers: &MeshBuffers) -> Self {
        if buffers.is_empty() {
            return Self {
                buffers: None,
                vertex_count: 0,
                index_count: 0,
            };
        }
        Self {
            buffers: Some(GpuBuffers {
                vertex: buffer::create_vertex(device, "Mesh VB", &buffers.vertices),
                index: buffer::create_index(device, "Mesh IB", &buffers.indices),
            }),
            vertex_count: buffers.vertices.len() as u32,
            index_count: buffers.indices.len() as u32,
        }
    }

    /// Imports the OBJ file at `path` and uploads it in one step.
    ///
    /// An empty path fails fast with [`MeshError::NullSource`]. Everything
    /// else degrades: a missing file or one without usable faces produces
    /// the empty resource (with diagnostics on the log), never an error.
    pub fn from_file(device: &wgpu::Device, path: &Path) -> Result<Self, MeshError> {
        Ok(Self::new(device, &load_source(path)?))
    }

    /// True when there is nothing to draw.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffers.is_none()
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    #[inline]
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    #[inline]
    pub fn triangle_count(&self) -> u32 {
        self.index_count / 3
    }
}

impl Drawable for GpuMesh {
    fn draw(&self, state: &mut RenderState) {
        // Empty geometry is a valid state; drawing it is defined as a no-op.
        let Some(buffers) = &self.buffers else { return };
        state.draw_indexed(&buffers.vertex, &buffers.index, self.index_count);
    }
}

/// Contract check + import, separated from the upload so the error path
/// stays testable without a device.
fn load_source(path: &Path) -> Result<MeshBuffers, MeshError> {
    if path.as_os_str().is_empty() {
        return Err(MeshError::NullSource);
    }
    let buffers = obj::load(path);
    if buffers.is_empty() {
        warn!("{}: uploading empty mesh resource", path.display());
    }
    Ok(buffers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_is_a_contract_violation() {
        assert!(matches!(
            load_source(Path::new("")),
            Err(MeshError::NullSource)
        ));
    }

    #[test]
    fn missing_file_degrades_to_empty_buffers() {
        let buffers = load_source(Path::new("/no/such/mesh.obj")).expect("recoverable");
        assert!(buffers.is_empty());
    }
}
