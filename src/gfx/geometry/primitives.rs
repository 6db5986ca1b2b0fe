use super::GeometryData;

/// Unit cube centred at the origin, spanning -0.5..0.5 on every axis.
///
/// Faces do not share vertices so each face keeps its own outward normal.
pub fn generate_cube() -> GeometryData {
    // (normal, four corners counter-clockwise seen from outside)
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        (
            [0.0, 0.0, 1.0],
            [[-0.5, -0.5, 0.5], [0.5, -0.5, 0.5], [0.5, 0.5, 0.5], [-0.5, 0.5, 0.5]],
        ),
        (
            [0.0, 0.0, -1.0],
            [[0.5, -0.5, -0.5], [-0.5, -0.5, -0.5], [-0.5, 0.5, -0.5], [0.5, 0.5, -0.5]],
        ),
        (
            [-1.0, 0.0, 0.0],
            [[-0.5, -0.5, -0.5], [-0.5, -0.5, 0.5], [-0.5, 0.5, 0.5], [-0.5, 0.5, -0.5]],
        ),
        (
            [1.0, 0.0, 0.0],
            [[0.5, -0.5, 0.5], [0.5, -0.5, -0.5], [0.5, 0.5, -0.5], [0.5, 0.5, 0.5]],
        ),
        (
            [0.0, 1.0, 0.0],
            [[-0.5, 0.5, 0.5], [0.5, 0.5, 0.5], [0.5, 0.5, -0.5], [-0.5, 0.5, -0.5]],
        ),
        (
            [0.0, -1.0, 0.0],
            [[-0.5, -0.5, -0.5], [0.5, -0.5, -0.5], [0.5, -0.5, 0.5], [-0.5, -0.5, 0.5]],
        ),
    ];

    let mut data = GeometryData::default();
    for (normal, corners) in faces {
        let base = data.vertices.len() as u32;
        data.vertices.extend_from_slice(&corners);
        data.normals.extend_from_slice(&[normal; 4]);
        data.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    data
}

/// Unit quad in the XZ plane at y = 0, facing +Y
pub fn generate_plane() -> GeometryData {
    GeometryData {
        vertices: vec![
            [-0.5, 0.0, 0.5],
            [0.5, 0.0, 0.5],
            [0.5, 0.0, -0.5],
            [-0.5, 0.0, -0.5],
        ],
        normals: vec![[0.0, 1.0, 0.0]; 4],
        indices: vec![0, 1, 2, 2, 3, 0],
    }
}

/// The twelve edges of the unit cube as line-list indices
pub fn generate_cube_edges() -> GeometryData {
    let mut vertices = Vec::with_capacity(8);
    for i in 0..8u32 {
        vertices.push([
            if i & 1 == 0 { -0.5 } else { 0.5 },
            if i & 2 == 0 { -0.5 } else { 0.5 },
            if i & 4 == 0 { -0.5 } else { 0.5 },
        ]);
    }

    // Two corners share an edge when their indices differ in exactly one bit
    let mut indices = Vec::with_capacity(24);
    for a in 0..8u32 {
        for bit in [1, 2, 4] {
            let b = a | bit;
            if b != a {
                indices.push(a);
                indices.push(b);
            }
        }
    }

    GeometryData {
        normals: vec![[0.0, 1.0, 0.0]; vertices.len()],
        vertices,
        indices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_counts() {
        let cube = generate_cube();
        assert_eq!(cube.vertex_count(), 24);
        assert_eq!(cube.triangle_count(), 12);
        assert_eq!(cube.normals.len(), 24);
        assert!(cube.indices.iter().all(|&i| (i as usize) < cube.vertex_count()));
    }

    #[test]
    fn test_cube_faces_wind_outward() {
        let cube = generate_cube();
        for tri in cube.indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| cube.vertices[i as usize]);
            let e1 = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
            let e2 = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
            let cross = [
                e1[1] * e2[2] - e1[2] * e2[1],
                e1[2] * e2[0] - e1[0] * e2[2],
                e1[0] * e2[1] - e1[1] * e2[0],
            ];
            let n = cube.normals[tri[0] as usize];
            let dot = cross[0] * n[0] + cross[1] * n[1] + cross[2] * n[2];
            assert!(dot > 0.0, "triangle {:?} winds inward", tri);
        }
    }

    #[test]
    fn test_plane_is_flat() {
        let plane = generate_plane();
        assert_eq!(plane.triangle_count(), 2);
        assert!(plane.vertices.iter().all(|v| v[1] == 0.0));
    }

    #[test]
    fn test_cube_edges() {
        let edges = generate_cube_edges();
        assert_eq!(edges.vertex_count(), 8);
        assert_eq!(edges.indices.len(), 24);

        for pair in edges.indices.chunks(2) {
            let (a, b) = (edges.vertices[pair[0] as usize], edges.vertices[pair[1] as usize]);
            let differing = (0..3).filter(|&k| a[k] != b[k]).count();
            assert_eq!(differing, 1);
        }
    }

    #[test]
    fn test_to_vertices_interleaves() {
        let verts = generate_plane().to_vertices();
        assert_eq!(verts.len(), 4);
        assert_eq!(verts[0].normal, [0.0, 1.0, 0.0]);
        assert_eq!(verts[2].position, [0.5, 0.0, -0.5]);
    }
}
