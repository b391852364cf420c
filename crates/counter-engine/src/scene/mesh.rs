use crate::coords::Vec2;
use crate::paint::Color;

/// How a flat index list is assembled into triangles.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PrimitiveMode {
    /// Each index after the first two forms a triangle with the previous two.
    TriangleStrip,
    /// Every three indices form an independent triangle.
    TriangleList,
}

impl PrimitiveMode {
    /// Number of triangles produced by `index_count` indices in this mode.
    pub fn triangle_count(self, index_count: usize) -> usize {
        match self {
            PrimitiveMode::TriangleStrip => index_count.saturating_sub(2),
            PrimitiveMode::TriangleList => index_count / 3,
        }
    }
}

/// CPU-side mesh: positions, per-vertex colors and topology.
///
/// Storage is one contiguous vector per attribute, in insertion order, so each
/// maps 1:1 onto a GPU buffer (positions → location 0, colors → location 1).
///
/// Invariant: `positions.len() == colors.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub positions: Vec<[f32; 4]>,
    pub colors: Vec<[f32; 4]>,
    pub indices: Vec<u16>,
    pub mode: PrimitiveMode,
}

impl MeshData {
    pub fn new(mode: PrimitiveMode) -> Self {
        Self {
            positions: Vec::new(),
            colors: Vec::new(),
            indices: Vec::new(),
            mode,
        }
    }

    pub fn with_capacity(mode: PrimitiveMode, vertices: usize, indices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            colors: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
            mode,
        }
    }

    /// Most vertices a mesh may hold; `0xFFFF` is reserved as the strip
    /// restart index.
    pub const MAX_VERTICES: usize = u16::MAX as usize;

    /// Appends a vertex and returns its index.
    ///
    /// Builders keep meshes below [`MeshData::MAX_VERTICES`].
    pub fn push_vertex(&mut self, pos: Vec2, color: Color) -> u16 {
        debug_assert!(self.positions.len() < Self::MAX_VERTICES, "mesh exceeds u16 indices");
        let index = self.positions.len() as u16;
        self.positions.push(pos.to_homogeneous());
        self.colors.push(color.to_array());
        index
    }

    pub fn push_indices(&mut self, indices: &[u16]) {
        self.indices.extend_from_slice(indices);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns `true` when every index refers to an existing vertex.
    pub fn indices_in_bounds(&self) -> bool {
        let n = self.positions.len();
        self.indices.iter().all(|&i| (i as usize) < n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_vertex_returns_sequential_indices() {
        let mut m = MeshData::new(PrimitiveMode::TriangleList);
        assert_eq!(m.push_vertex(Vec2::new(0.0, 0.0), Color::RED), 0);
        assert_eq!(m.push_vertex(Vec2::new(1.0, 0.0), Color::RED), 1);
        assert_eq!(m.vertex_count(), 2);
        assert_eq!(m.colors.len(), 2);
        assert_eq!(m.positions[1], [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn indices_in_bounds_detects_dangling_index() {
        let mut m = MeshData::new(PrimitiveMode::TriangleList);
        m.push_vertex(Vec2::zero(), Color::BLUE);
        m.push_indices(&[0, 0, 0]);
        assert!(m.indices_in_bounds());
        m.push_indices(&[1]);
        assert!(!m.indices_in_bounds());
    }

    #[test]
    fn triangle_count_per_mode() {
        assert_eq!(PrimitiveMode::TriangleStrip.triangle_count(34), 32);
        assert_eq!(PrimitiveMode::TriangleList.triangle_count(9), 3);
        assert_eq!(PrimitiveMode::TriangleStrip.triangle_count(1), 0);
    }
}
