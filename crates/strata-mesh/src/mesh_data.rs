//! Fixed-capacity mesh buffer filled by the mesh builders.

use glam::Vec3;

/// A single mesh vertex, laid out for direct GPU upload.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    /// Board-space position: x and z across the board, y up.
    pub position: [f32; 3],
    /// Texture coordinates into the board color texture.
    pub uv: [f32; 2],
}

static_assertions::assert_eq_size!(MeshVertex, [u8; 20]);

/// Vertex and triangle buffers whose sizes are fixed when the mesh is created.
///
/// Builders compute the exact vertex and triangle counts up front. Adding past
/// either capacity, or referencing a vertex that has not been added yet, is a
/// builder bug and panics.
#[derive(Clone, Debug)]
pub struct MeshData {
    vertices: Vec<MeshVertex>,
    indices: Vec<u32>,
    vertex_capacity: usize,
    triangle_capacity: usize,
}

impl MeshData {
    /// Reserves room for exactly `vertex_count` vertices and `triangle_count` triangles.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(triangle_count * 3),
            vertex_capacity: vertex_count,
            triangle_capacity: triangle_count,
        }
    }

    /// Appends a vertex and returns its index.
    ///
    /// # Panics
    ///
    /// Panics if the vertex capacity is already used up.
    pub fn add_vertex(&mut self, position: Vec3, uv: [f32; 2]) -> u32 {
        assert!(
            self.vertices.len() < self.vertex_capacity,
            "vertex capacity {} exceeded",
            self.vertex_capacity
        );
        let index = self.vertices.len() as u32;
        self.vertices.push(MeshVertex {
            position: position.to_array(),
            uv,
        });
        index
    }

    /// Appends one triangle.
    ///
    /// # Panics
    ///
    /// Panics if the triangle capacity is used up or an index does not refer
    /// to an already added vertex.
    pub fn add_triangle(&mut self, a: u32, b: u32, c: u32) {
        assert!(
            self.triangle_count() < self.triangle_capacity,
            "triangle capacity {} exceeded",
            self.triangle_capacity
        );
        let added = self.vertices.len() as u32;
        assert!(
            a < added && b < added && c < added,
            "triangle ({a}, {b}, {c}) references a vertex not yet added ({added} present)"
        );
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Vertex buffer.
    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    /// Index buffer, three indices per triangle.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of vertices added so far.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles added so far.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns `true` once every reserved vertex and triangle slot is filled.
    pub fn is_complete(&self) -> bool {
        self.vertices.len() == self.vertex_capacity
            && self.triangle_count() == self.triangle_capacity
    }

    /// Raw vertex bytes for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Smoothed per-vertex normals: each triangle's area-weighted face normal
    /// `(b - a) x (c - a)` is accumulated onto its corners and the sums normalized.
    ///
    /// Vertices not used by any triangle get `[0, 1, 0]`.
    pub fn vertex_normals(&self) -> Vec<[f32; 3]> {
        let mut sums = vec![Vec3::ZERO; self.vertices.len()];
        for tri in self.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            let pa = Vec3::from_array(self.vertices[a].position);
            let pb = Vec3::from_array(self.vertices[b].position);
            let pc = Vec3::from_array(self.vertices[c].position);
            let face = (pb - pa).cross(pc - pa);
            sums[a] += face;
            sums[b] += face;
            sums[c] += face;
        }
        sums.into_iter()
            .map(|n| n.try_normalize().unwrap_or(Vec3::Y).to_array())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mesh() {
        let mesh = MeshData::with_capacity(0, 0);
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.is_complete());
    }

    #[test]
    fn test_fill_to_capacity() {
        let mut mesh = MeshData::with_capacity(3, 1);
        let a = mesh.add_vertex(Vec3::ZERO, [0.0, 0.0]);
        let b = mesh.add_vertex(Vec3::X, [1.0, 0.0]);
        assert!(!mesh.is_complete());
        let c = mesh.add_vertex(Vec3::Z, [0.0, 1.0]);
        mesh.add_triangle(a, b, c);
        assert!(mesh.is_complete());
        assert_eq!(mesh.indices(), &[0, 1, 2]);
        assert_eq!(mesh.vertex_bytes().len(), 3 * 20);
    }

    #[test]
    #[should_panic(expected = "vertex capacity 1 exceeded")]
    fn test_vertex_overflow_panics() {
        let mut mesh = MeshData::with_capacity(1, 0);
        mesh.add_vertex(Vec3::ZERO, [0.0; 2]);
        mesh.add_vertex(Vec3::ZERO, [0.0; 2]);
    }

    #[test]
    #[should_panic(expected = "not yet added")]
    fn test_forward_reference_panics() {
        let mut mesh = MeshData::with_capacity(3, 1);
        mesh.add_vertex(Vec3::ZERO, [0.0; 2]);
        mesh.add_triangle(0, 1, 2);
    }

    #[test]
    fn test_flat_quad_normals_point_up() {
        // Column-major quad with the top surface winding: a, b, c then b, d, c.
        let mut mesh = MeshData::with_capacity(4, 2);
        mesh.add_vertex(Vec3::new(0.0, 0.0, 0.0), [0.0; 2]);
        mesh.add_vertex(Vec3::new(0.0, 0.0, 1.0), [0.0; 2]);
        mesh.add_vertex(Vec3::new(1.0, 0.0, 0.0), [0.0; 2]);
        mesh.add_vertex(Vec3::new(1.0, 0.0, 1.0), [0.0; 2]);
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(1, 3, 2);
        for n in mesh.vertex_normals() {
            assert!((n[1] - 1.0).abs() < 1e-6, "normal {n:?} should point up");
        }
    }
}
