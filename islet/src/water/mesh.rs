//! Tessellated disc meshes for the water and seabed.
//!
//! The water needs real interior vertices for the wave displacement to be
//! visible, so the disc is built as concentric rings rather than a single
//! triangle fan. UVs span the disc's bounding square; the shader applies
//! its own tiling factor on top.

use bevy::render::mesh::{Indices, Mesh, PrimitiveTopology};

/// Builds a horizontal disc in the XZ plane, normals +Y.
///
/// `rings` controls radial tessellation (1 = plain fan), `segments` the
/// vertex count per ring.
pub fn radial_disc(radius: f32, rings: u32, segments: u32) -> Mesh {
    let rings = rings.max(1);
    let segments = segments.max(3);

    let vertex_count = (1 + rings * segments) as usize;
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(vertex_count);
    let mut normals: Vec<[f32; 3]> = Vec::with_capacity(vertex_count);
    let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(vertex_count);

    positions.push([0.0, 0.0, 0.0]);
    normals.push([0.0, 1.0, 0.0]);
    uvs.push([0.5, 0.5]);

    for ring in 1..=rings {
        let fraction = ring as f32 / rings as f32;
        let ring_radius = radius * fraction;
        for segment in 0..segments {
            let theta = segment as f32 / segments as f32 * std::f32::consts::TAU;
            let (x, z) = (theta.cos() * ring_radius, theta.sin() * ring_radius);
            positions.push([x, 0.0, z]);
            normals.push([0.0, 1.0, 0.0]);
            uvs.push([0.5 + 0.5 * fraction * theta.cos(), 0.5 + 0.5 * fraction * theta.sin()]);
        }
    }

    // Index of vertex `segment` on one-based `ring`.
    let vertex_at = |ring: u32, segment: u32| 1 + (ring - 1) * segments + (segment % segments);

    let mut indices: Vec<u32> = Vec::with_capacity((segments * 3 + (rings - 1) * segments * 6) as usize);

    // Innermost ring fans out from the center. Winding keeps +Y up.
    for segment in 0..segments {
        indices.extend([0, vertex_at(1, segment + 1), vertex_at(1, segment)]);
    }

    // Quads between consecutive rings.
    for ring in 1..rings {
        for segment in 0..segments {
            let (a0, a1) = (vertex_at(ring, segment), vertex_at(ring, segment + 1));
            let (b0, b1) = (vertex_at(ring + 1, segment), vertex_at(ring + 1, segment + 1));
            indices.extend([a0, b1, b0]);
            indices.extend([a0, a1, b1]);
        }
    }

    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, Default::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::mesh::VertexAttributeValues;

    fn disc_positions(mesh: &Mesh) -> &Vec<[f32; 3]> {
        match mesh.attribute(Mesh::ATTRIBUTE_POSITION) {
            Some(VertexAttributeValues::Float32x3(positions)) => positions,
            _ => panic!("disc mesh is missing positions"),
        }
    }

    #[test]
    fn disc_has_expected_vertex_and_index_counts() {
        let mesh = radial_disc(1000.0, 48, 96);
        assert_eq!(disc_positions(&mesh).len(), 1 + 48 * 96);
        match mesh.indices() {
            Some(Indices::U32(indices)) => {
                assert_eq!(indices.len() as u32, 96 * 3 + 47 * 96 * 6);
                let max = *indices.iter().max().unwrap();
                assert!((max as usize) < 1 + 48 * 96);
            }
            _ => panic!("disc mesh is missing u32 indices"),
        }
    }

    #[test]
    fn disc_vertices_stay_inside_the_radius() {
        let mesh = radial_disc(250.0, 8, 24);
        for [x, y, z] in disc_positions(&mesh) {
            assert_eq!(*y, 0.0);
            assert!((x * x + z * z).sqrt() <= 250.0 + 1e-3);
        }
    }

    #[test]
    fn degenerate_arguments_are_clamped() {
        let mesh = radial_disc(10.0, 0, 2);
        // Falls back to a minimal fan instead of an empty mesh.
        assert_eq!(disc_positions(&mesh).len(), 1 + 3);
    }
}
