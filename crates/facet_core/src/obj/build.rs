//! Turns parsed [`ObjData`] into a deduplicated, triangulated [`MeshBuffers`].
//!
//! Each face corner is resolved to a bounds-checked [`VertexKey`]; the key
//! is interned so every distinct attribute combination is materialised
//! exactly once, then the face is fan-triangulated over the interned slots.

use std::collections::HashMap;

use log::warn;

use super::parse::{FaceVertex, ObjData};
use crate::mesh::{MeshBuffers, Vertex};

/// Fully resolved, bounds-checked attribute indices for one corner
/// (0-based; `None` = unset). Two corners that resolve to the same triple
/// must share one output vertex, so the derived `Hash`/`Eq` give the dedup
/// map an exact composite key: a corner differing in any single component
/// is a distinct vertex even when its position matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct VertexKey {
    position: Option<usize>,
    texcoord: Option<usize>,
    normal: Option<usize>,
}

/// Resolves a raw OBJ index against an attribute array of `len` entries:
/// positive is 1-based, negative is relative to the end (`len + index`).
/// `0` and out-of-range values resolve to `None`: the component degrades
/// to unset, the surrounding face survives.
fn resolve(index: isize, len: usize) -> Option<usize> {
    let resolved = if index > 0 {
        index - 1
    } else if index < 0 {
        len as isize + index
    } else {
        return None;
    };
    if resolved >= 0 && (resolved as usize) < len {
        Some(resolved as usize)
    } else {
        None
    }
}

fn resolve_corner(corner: &FaceVertex, data: &ObjData) -> VertexKey {
    let position = resolve(corner.position, data.positions.len());
    if position.is_none() {
        warn!(
            "position index {} out of range ({} declared)",
            corner.position,
            data.positions.len()
        );
    }
    let texcoord = corner.texcoord.and_then(|index| {
        let slot = resolve(index, data.texcoords.len());
        if slot.is_none() {
            warn!(
                "texcoord index {index} out of range ({} declared)",
                data.texcoords.len()
            );
        }
        slot
    });
    let normal = corner.normal.and_then(|index| {
        let slot = resolve(index, data.normals.len());
        if slot.is_none() {
            warn!(
                "normal index {index} out of range ({} declared)",
                data.normals.len()
            );
        }
        slot
    });
    VertexKey {
        position,
        texcoord,
        normal,
    }
}

/// Maps each distinct [`VertexKey`] to its slot in the output vertex list.
/// Insertion order of the vertex list is first-seen order of each key.
#[derive(Default)]
struct VertexInterner {
    slots: HashMap<VertexKey, u32>,
    vertices: Vec<Vertex>,
}

impl VertexInterner {
    fn intern(&mut self, key: VertexKey, data: &ObjData) -> u32 {
        if let Some(&slot) = self.slots.get(&key) {
            return slot;
        }
        let mut vertex = Vertex::default();
        if let Some(p) = key.position {
            vertex.position = data.positions[p].to_array();
        }
        if let Some(t) = key.texcoord {
            vertex.uv = data.texcoords[t].to_array();
        }
        if let Some(n) = key.normal {
            vertex.normal = data.normals[n].to_array();
        }
        let slot = self.vertices.len() as u32;
        self.vertices.push(vertex);
        self.slots.insert(key, slot);
        slot
    }
}

/// Triangulates and deduplicates every face in `data`.
pub fn build(data: &ObjData) -> MeshBuffers {
    let mut interner = VertexInterner::default();
    let mut indices = Vec::new();

    for face in &data.faces {
        let corners: Vec<u32> = face
            .iter()
            .map(|corner| interner.intern(resolve_corner(corner, data), data))
            .collect();

        // Fan triangulation anchored at the first corner: n corners emit
        // n - 2 triangles. Correct for the convex planar polygons this
        // format is expected to carry; not a concave triangulator.
        for i in 1..corners.len().saturating_sub(1) {
            indices.push(corners[0]);
            indices.push(corners[i]);
            indices.push(corners[i + 1]);
        }
    }

    MeshBuffers {
        vertices: interner.vertices,
        indices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_str(src: &str) -> MeshBuffers {
        build(&ObjData::parse(src))
    }

    /// Every index must reference a real vertex and triangles must come in
    /// whole triples, whatever the input.
    fn assert_invariants(buffers: &MeshBuffers) {
        assert_eq!(buffers.indices.len() % 3, 0);
        for &index in &buffers.indices {
            assert!((index as usize) < buffers.vertices.len());
        }
    }

    #[test]
    fn resolve_positive_is_one_based() {
        assert_eq!(resolve(1, 5), Some(0));
        assert_eq!(resolve(5, 5), Some(4));
        assert_eq!(resolve(6, 5), None);
    }

    #[test]
    fn resolve_negative_counts_from_the_end() {
        assert_eq!(resolve(-1, 5), Some(4));
        assert_eq!(resolve(-5, 5), Some(0));
        assert_eq!(resolve(-6, 5), None);
    }

    #[test]
    fn resolve_zero_is_invalid() {
        assert_eq!(resolve(0, 5), None);
        assert_eq!(resolve(0, 0), None);
    }

    #[test]
    fn quad_face_fans_into_two_triangles() {
        let buffers = build_str(
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\n\
             vt 0 0\nvt 1 0\nvt 1 1\nvt 0 1\n\
             vn 0 0 1\n\
             f 1/1/1 2/2/1 3/3/1 4/4/1\n",
        );
        assert_invariants(&buffers);
        assert_eq!(buffers.vertices.len(), 4);
        assert_eq!(buffers.indices, vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn shared_edge_vertices_are_not_duplicated() {
        let buffers = build_str(
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\n\
             vt 0 0\nvt 1 0\nvt 1 1\nvt 0 1\n\
             vn 0 0 1\n\
             f 1/1/1 2/2/1 3/3/1\n\
             f 1/1/1 3/3/1 4/4/1\n",
        );
        assert_invariants(&buffers);
        assert_eq!(buffers.vertices.len(), 4);
        assert_eq!(buffers.indices.len(), 6);
    }

    #[test]
    fn seams_fork_into_separate_vertices() {
        // Same position, two different normals: two output vertices.
        let buffers = build_str(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\n\
             vn 0 0 1\nvn 1 0 0\n\
             f 1//1 2//1 3//1\n\
             f 1//2 2//1 3//1\n",
        );
        assert_invariants(&buffers);
        assert_eq!(buffers.vertices.len(), 4);
    }

    #[test]
    fn ngon_emits_n_minus_two_triangles_over_the_same_corners() {
        let buffers = build_str(
            "v 0 0 0\nv 2 0 0\nv 3 1 0\nv 2 2 0\nv 0 2 0\nv -1 1 0\n\
             f 1 2 3 4 5 6\n",
        );
        assert_invariants(&buffers);
        assert_eq!(buffers.triangle_count(), 4);
        assert_eq!(buffers.vertices.len(), 6);
        // Every triangle is anchored at corner 0 and only references the
        // face's own corners.
        for triangle in buffers.indices.chunks(3) {
            assert_eq!(triangle[0], 0);
            assert!(triangle.iter().all(|&i| i < 6));
        }
    }

    #[test]
    fn negative_indices_match_their_positive_equivalents() {
        let positive = build_str("v 1 0 0\nv 0 1 0\nv 0 0 1\nf 1 2 3\n");
        let negative = build_str("v 1 0 0\nv 0 1 0\nv 0 0 1\nf -3 -2 -1\n");
        assert_eq!(positive.vertices, negative.vertices);
        assert_eq!(positive.indices, negative.indices);
    }

    #[test]
    fn out_of_range_component_degrades_without_losing_the_face() {
        // Texcoord index 9 does not exist; the corner keeps its position
        // and the face still triangulates.
        let buffers = build_str(
            "v 1 0 0\nv 0 1 0\nv 0 0 1\n\
             vt 0.5 0.5\n\
             f 1/9 2/1 3/1\n",
        );
        assert_invariants(&buffers);
        assert_eq!(buffers.triangle_count(), 1);
        assert_eq!(buffers.vertices[0].uv, [0.0, 0.0]);
        assert_eq!(buffers.vertices[0].position, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn unset_components_default_to_zero() {
        let buffers = build_str("v 1 2 3\nv 4 5 6\nv 7 8 9\nf 1 2 3\n");
        for vertex in &buffers.vertices {
            assert_eq!(vertex.normal, [0.0, 0.0, 0.0]);
            assert_eq!(vertex.uv, [0.0, 0.0]);
        }
    }

    #[test]
    fn attributes_without_faces_build_nothing() {
        let buffers = build_str("v 0 0 0\nvt 0 0\nvn 0 0 1\n");
        assert!(buffers.is_empty());
        assert_eq!(buffers.vertices.len(), 0);
    }

    #[test]
    fn dedup_is_exact_across_the_whole_mesh() {
        // 8 corners over 2 faces, but only 4 distinct (p, t, n) triples.
        let buffers = build_str(
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\n\
             vt 0 0\n\
             vn 0 0 1\n\
             f 1/1/1 2/1/1 3/1/1 4/1/1\n\
             f 4/1/1 3/1/1 2/1/1 1/1/1\n",
        );
        assert_invariants(&buffers);
        assert_eq!(buffers.vertices.len(), 4);
        assert_eq!(buffers.triangle_count(), 4);
    }
}
