/// Unit-radius disk in the XY plane, facing +Z, as an indexed triangle
/// fan around a centre vertex.
use std::f32::consts::TAU;

use facet_core::{MeshBuffers, Vertex};

/// `slices` is clamped to at least 3 (a triangle).
pub fn disk(slices: u32) -> MeshBuffers {
    let slices = slices.max(3);

    let mut vertices = Vec::with_capacity(slices as usize + 1);
    vertices.push(Vertex {
        position: [0.0, 0.0, 0.0],
        normal: [0.0, 0.0, 1.0],
        uv: [0.5, 0.5],
    });
    for i in 0..slices {
        let angle = TAU * i as f32 / slices as f32;
        let (sin, cos) = angle.sin_cos();
        vertices.push(Vertex {
            position: [cos, sin, 0.0],
            normal: [0.0, 0.0, 1.0],
            uv: [0.5 + 0.5 * cos, 0.5 - 0.5 * sin],
        });
    }

    let mut indices = Vec::with_capacity(slices as usize * 3);
    for i in 0..slices {
        indices.push(0);
        indices.push(1 + i);
        indices.push(1 + (i + 1) % slices);
    }

    MeshBuffers { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_count_drives_triangle_count() {
        let buffers = disk(16);
        assert_eq!(buffers.vertices.len(), 17);
        assert_eq!(buffers.triangle_count(), 16);
        assert_eq!(buffers.indices.len() % 3, 0);
        assert!(buffers
            .indices
            .iter()
            .all(|&i| (i as usize) < buffers.vertices.len()));
    }

    #[test]
    fn degenerate_slice_counts_are_clamped() {
        assert_eq!(disk(0).triangle_count(), 3);
        assert_eq!(disk(2).triangle_count(), 3);
    }

    #[test]
    fn rim_sits_on_the_unit_circle() {
        for vertex in disk(8).vertices.iter().skip(1) {
            let [x, y, z] = vertex.position;
            assert!((x * x + y * y - 1.0).abs() < 1e-5);
            assert_eq!(z, 0.0);
        }
    }
}
