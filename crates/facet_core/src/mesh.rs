//! CPU-side mesh data produced by the import pipeline and the procedural
//! primitive generators.

use bytemuck::{Pod, Zeroable};

/// One interleaved vertex, laid out exactly as the GPU vertex buffer expects
/// it: position at location 0, normal at 1, texture coordinates at 2.
///
/// Components the source mesh never declared stay at zero: an unset normal
/// or texcoord is valid data, not an error.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// The finished vertex/index pair for one mesh.
///
/// `indices` is grouped in triples, one per triangle, and every entry is a
/// valid index into `vertices`. A `MeshBuffers` is built once, by the OBJ
/// pipeline or a primitive generator, and never mutated afterwards; an
/// empty instance is a legitimate outcome (a source with no faces), not a
/// failure.
#[derive(Debug, Clone, Default)]
pub struct MeshBuffers {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.indices.is_empty()
    }

    /// Number of triangles described by the index list.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_by_default() {
        let buffers = MeshBuffers::default();
        assert!(buffers.is_empty());
        assert_eq!(buffers.triangle_count(), 0);
    }

    #[test]
    fn vertices_without_indices_are_still_empty() {
        let buffers = MeshBuffers {
            vertices: vec![Vertex::default()],
            indices: Vec::new(),
        };
        assert!(buffers.is_empty());
    }
}
