use bytemuck::{Pod, Zeroable};

use super::path::Tessellation;
use crate::widgets::Color;

/// A colored vertex in logical surface coordinates, ready for upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Flat triangle list for every solid shape in a frame, in paint order.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tessellation translated by `origin` and filled with `color`.
    pub fn append(&mut self, tessellation: &Tessellation, origin: (f32, f32), color: Color) {
        if tessellation.is_empty() || color.a <= 0.0 {
            return;
        }

        let base = self.vertices.len() as u32;
        let color = color.to_array();
        self.vertices.extend(
            tessellation
                .vertices
                .iter()
                .map(|p| Vertex::new([p[0] + origin.0, p[1] + origin.1], color)),
        );
        self.indices
            .extend(tessellation.indices.iter().map(|i| base + i));
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Raw vertex bytes for a vertex buffer.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index bytes for an index buffer.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Tessellation {
        Tessellation {
            vertices: vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]],
            indices: vec![0, 1, 2],
        }
    }

    #[test]
    fn test_append_offsets_positions_and_indices() {
        let mut mesh = Mesh::new();
        mesh.append(&triangle(), (0.0, 0.0), Color::WHITE);
        mesh.append(&triangle(), (10.0, 20.0), Color::BLACK);

        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(&mesh.indices[3..], &[3, 4, 5]);
        assert_eq!(mesh.vertices[4].position, [11.0, 20.0]);
        assert_eq!(mesh.vertices[4].color, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_transparent_fill_is_skipped() {
        let mut mesh = Mesh::new();
        mesh.append(&triangle(), (0.0, 0.0), Color::TRANSPARENT);
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_byte_views() {
        let mut mesh = Mesh::new();
        mesh.append(&triangle(), (0.0, 0.0), Color::WHITE);
        assert_eq!(mesh.vertex_bytes().len(), 3 * std::mem::size_of::<Vertex>());
        assert_eq!(mesh.index_bytes().len(), 3 * 4);
    }
}
