/// Unit cube centred at the origin.
///
/// 24 unique vertices (4 per face, so each face carries its own normal and
/// texture coordinates) and 36 indices (2 triangles per face).
use facet_core::{MeshBuffers, Vertex};

pub fn cube() -> MeshBuffers {
    let v = |position: [f32; 3], normal: [f32; 3], uv: [f32; 2]| Vertex {
        position,
        normal,
        uv,
    };

    const PX: [f32; 3] = [1.0, 0.0, 0.0];
    const NX: [f32; 3] = [-1.0, 0.0, 0.0];
    const PY: [f32; 3] = [0.0, 1.0, 0.0];
    const NY: [f32; 3] = [0.0, -1.0, 0.0];
    const PZ: [f32; 3] = [0.0, 0.0, 1.0];
    const NZ: [f32; 3] = [0.0, 0.0, -1.0];

    #[rustfmt::skip]
    let vertices = vec![
        // front  (z+)
        v([-1.0, -1.0,  1.0], PZ, [0.0, 1.0]), v([ 1.0, -1.0,  1.0], PZ, [1.0, 1.0]),
        v([ 1.0,  1.0,  1.0], PZ, [1.0, 0.0]), v([-1.0,  1.0,  1.0], PZ, [0.0, 0.0]),
        // back   (z-)
        v([ 1.0, -1.0, -1.0], NZ, [0.0, 1.0]), v([-1.0, -1.0, -1.0], NZ, [1.0, 1.0]),
        v([-1.0,  1.0, -1.0], NZ, [1.0, 0.0]), v([ 1.0,  1.0, -1.0], NZ, [0.0, 0.0]),
        // left   (x-)
        v([-1.0, -1.0, -1.0], NX, [0.0, 1.0]), v([-1.0, -1.0,  1.0], NX, [1.0, 1.0]),
        v([-1.0,  1.0,  1.0], NX, [1.0, 0.0]), v([-1.0,  1.0, -1.0], NX, [0.0, 0.0]),
        // right  (x+)
        v([ 1.0, -1.0,  1.0], PX, [0.0, 1.0]), v([ 1.0, -1.0, -1.0], PX, [1.0, 1.0]),
        v([ 1.0,  1.0, -1.0], PX, [1.0, 0.0]), v([ 1.0,  1.0,  1.0], PX, [0.0, 0.0]),
        // top    (y+)
        v([-1.0,  1.0,  1.0], PY, [0.0, 1.0]), v([ 1.0,  1.0,  1.0], PY, [1.0, 1.0]),
        v([ 1.0,  1.0, -1.0], PY, [1.0, 0.0]), v([-1.0,  1.0, -1.0], PY, [0.0, 0.0]),
        // bottom (y-)
        v([-1.0, -1.0, -1.0], NY, [0.0, 1.0]), v([ 1.0, -1.0, -1.0], NY, [1.0, 1.0]),
        v([ 1.0, -1.0,  1.0], NY, [1.0, 0.0]), v([-1.0, -1.0,  1.0], NY, [0.0, 0.0]),
    ];

    let mut indices = Vec::with_capacity(36);
    for face in 0u32..6 {
        let base = face * 4;
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    MeshBuffers { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_vertices_and_two_triangles_per_face() {
        let buffers = cube();
        assert_eq!(buffers.vertices.len(), 24);
        assert_eq!(buffers.indices.len(), 36);
        assert!(buffers.indices.iter().all(|&i| (i as usize) < 24));
    }

    #[test]
    fn every_normal_is_axis_aligned_and_unit_length() {
        for vertex in cube().vertices {
            let [x, y, z] = vertex.normal;
            assert_eq!(x.abs() + y.abs() + z.abs(), 1.0);
        }
    }

    #[test]
    fn triangles_agree_with_their_face_normal() {
        // Winding check: each triangle's geometric normal must point the
        // same way as the vertex normals it references.
        let buffers = cube();
        for triangle in buffers.indices.chunks(3) {
            let p = |i: usize| glam::Vec3::from_array(buffers.vertices[triangle[i] as usize].position);
            let n = glam::Vec3::from_array(buffers.vertices[triangle[0] as usize].normal);
            let geometric = (p(1) - p(0)).cross(p(2) - p(1));
            assert!(geometric.dot(n) > 0.0);
        }
    }
}
