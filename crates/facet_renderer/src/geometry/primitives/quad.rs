/// Unit quad in the XY plane, centred at the origin, facing +Z.
use facet_core::{MeshBuffers, Vertex};

pub fn quad() -> MeshBuffers {
    let v = |position: [f32; 3], uv: [f32; 2]| Vertex {
        position,
        normal: [0.0, 0.0, 1.0],
        uv,
    };

    #[rustfmt::skip]
    let vertices = vec![
        v([-1.0, -1.0, 0.0], [0.0, 1.0]),
        v([ 1.0, -1.0, 0.0], [1.0, 1.0]),
        v([ 1.0,  1.0, 0.0], [1.0, 0.0]),
        v([-1.0,  1.0, 0.0], [0.0, 0.0]),
    ];

    MeshBuffers {
        vertices,
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_triangles_over_four_vertices() {
        let buffers = quad();
        assert_eq!(buffers.vertices.len(), 4);
        assert_eq!(buffers.triangle_count(), 2);
        assert!(buffers.indices.iter().all(|&i| (i as usize) < 4));
    }
}
