//! Mesh data for the lit box

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Vertex with position and normal
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
}

impl Vertex {
    pub const fn new(position: Vec3, normal: Vec3) -> Self {
        Self { position, normal }
    }

    /// Byte offset of the normal attribute
    pub const NORMAL_OFFSET: usize = std::mem::size_of::<Vec3>();
}

/// A mesh with vertex and index data
#[derive(Debug, Clone)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub name: String,
}

impl Mesh {
    pub fn new(name: &str) -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            name: name.to_string(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get vertex data as bytes
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Get index data as bytes
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// The 2x2x2 box centred at the origin.
    ///
    /// Four vertices per face so every face gets a flat normal. Faces are
    /// ordered front (-Z), back (+Z), top, bottom, left, right and wound
    /// clockwise when seen from outside in a left-handed system.
    pub fn lighting_box() -> Self {
        let mut mesh = Mesh::new("lighting_box");

        let faces: [(Vec3, [Vec3; 4]); 6] = [
            // Front
            (
                Vec3::NEG_Z,
                [
                    Vec3::new(-1.0, -1.0, -1.0),
                    Vec3::new(-1.0, 1.0, -1.0),
                    Vec3::new(1.0, 1.0, -1.0),
                    Vec3::new(1.0, -1.0, -1.0),
                ],
            ),
            // Back
            (
                Vec3::Z,
                [
                    Vec3::new(-1.0, -1.0, 1.0),
                    Vec3::new(1.0, -1.0, 1.0),
                    Vec3::new(1.0, 1.0, 1.0),
                    Vec3::new(-1.0, 1.0, 1.0),
                ],
            ),
            // Top
            (
                Vec3::Y,
                [
                    Vec3::new(-1.0, 1.0, -1.0),
                    Vec3::new(-1.0, 1.0, 1.0),
                    Vec3::new(1.0, 1.0, 1.0),
                    Vec3::new(1.0, 1.0, -1.0),
                ],
            ),
            // Bottom
            (
                Vec3::NEG_Y,
                [
                    Vec3::new(-1.0, -1.0, -1.0),
                    Vec3::new(1.0, -1.0, -1.0),
                    Vec3::new(1.0, -1.0, 1.0),
                    Vec3::new(-1.0, -1.0, 1.0),
                ],
            ),
            // Left
            (
                Vec3::NEG_X,
                [
                    Vec3::new(-1.0, -1.0, 1.0),
                    Vec3::new(-1.0, 1.0, 1.0),
                    Vec3::new(-1.0, 1.0, -1.0),
                    Vec3::new(-1.0, -1.0, -1.0),
                ],
            ),
            // Right
            (
                Vec3::X,
                [
                    Vec3::new(1.0, -1.0, -1.0),
                    Vec3::new(1.0, 1.0, -1.0),
                    Vec3::new(1.0, 1.0, 1.0),
                    Vec3::new(1.0, -1.0, 1.0),
                ],
            ),
        ];

        for (normal, corners) in faces {
            mesh.vertices
                .extend(corners.iter().map(|&position| Vertex::new(position, normal)));
        }

        // Two triangles per face
        for face in 0..6 {
            let base = face * 4;
            mesh.indices.extend_from_slice(&[
                base,
                base + 1,
                base + 2,
                base,
                base + 2,
                base + 3,
            ]);
        }

        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_counts() {
        let mesh = Mesh::lighting_box();
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.index_count(), 36);
        assert_eq!(mesh.triangle_count(), 12);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertex_count()));
    }

    #[test]
    fn box_byte_sizes() {
        let mesh = Mesh::lighting_box();
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        assert_eq!(Vertex::NORMAL_OFFSET, 12);
        assert_eq!(mesh.vertex_bytes().len(), 24 * 24);
        assert_eq!(mesh.index_bytes().len(), 36 * 4);
    }

    #[test]
    fn face_normals_point_outward() {
        let mesh = Mesh::lighting_box();
        for vertex in &mesh.vertices {
            assert!((vertex.normal.length() - 1.0).abs() < 1e-6);
            // Each corner lies on the face plane its normal points out of
            assert_eq!(vertex.position.dot(vertex.normal), 1.0);
        }
    }

    #[test]
    fn triangles_wind_clockwise_from_outside() {
        // Clockwise in a left-handed frame: (b - a) x (c - a) comes out along the normal
        let mesh = Mesh::lighting_box();
        for triangle in mesh.indices.chunks(3) {
            let a = mesh.vertices[triangle[0] as usize];
            let b = mesh.vertices[triangle[1] as usize];
            let c = mesh.vertices[triangle[2] as usize];
            let face_normal = (b.position - a.position).cross(c.position - a.position);
            assert!(face_normal.dot(a.normal) > 0.0);
        }
    }
}
