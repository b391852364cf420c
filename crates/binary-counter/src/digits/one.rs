use counter_engine::coords::Vec2;
use counter_engine::paint::Color;
use counter_engine::scene::{MeshData, PrimitiveMode};

pub const ONE_VERTEX_COUNT: usize = 5;
pub const ONE_INDEX_COUNT: usize = 9;

/// Dimensions of the "1" glyph, in NDC relative to its center.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OneDims {
    pub half_base: f32,
    pub half_height: f32,
    /// Upward shift applied to the bar's four corners.
    pub lift: f32,
    /// Offset of the flag apex from the center.
    pub flag: Vec2,
}

impl Default for OneDims {
    fn default() -> Self {
        Self {
            half_base: 0.025,
            half_height: 0.7,
            lift: 0.008,
            flag: Vec2::new(-0.1, 0.408),
        }
    }
}

/// Bar corners (0..=3, counter-clockwise from bottom-left) then the flag apex (4).
const ONE_INDICES: [u16; ONE_INDEX_COUNT] = [
    0, 1, 2, // body, lower-right half
    0, 2, 3, // body, upper-left half
    3, 2, 4, // flag
];

/// Builds the "1" glyph with default dimensions.
pub fn build_one(center: Vec2) -> MeshData {
    build_one_with(center, OneDims::default())
}

/// Builds the "1" glyph: a vertical bar plus a flag stroke toward the upper left.
///
/// Output: 5 vertices, 9 indices (three independent triangles), all blue.
pub fn build_one_with(center: Vec2, dims: OneDims) -> MeshData {
    let mut mesh = MeshData::with_capacity(PrimitiveMode::TriangleList, ONE_VERTEX_COUNT, ONE_INDEX_COUNT);

    let bottom = center.y - dims.half_height + dims.lift;
    let top = center.y + dims.half_height + dims.lift;
    let left = center.x - dims.half_base;
    let right = center.x + dims.half_base;

    mesh.push_vertex(Vec2::new(left, bottom), Color::BLUE);
    mesh.push_vertex(Vec2::new(right, bottom), Color::BLUE);
    mesh.push_vertex(Vec2::new(right, top), Color::BLUE);
    mesh.push_vertex(Vec2::new(left, top), Color::BLUE);
    mesh.push_vertex(center + dims.flag, Color::BLUE);

    mesh.push_indices(&ONE_INDICES);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_vertices_nine_indices() {
        let m = build_one(Vec2::new(0.75, 0.0));
        assert_eq!(m.vertex_count(), 5);
        assert_eq!(m.index_count(), 9);
        assert_eq!(m.mode, PrimitiveMode::TriangleList);
        assert_eq!(m.mode.triangle_count(m.index_count()), 3);
        assert!(m.indices_in_bounds());
    }

    #[test]
    fn flag_triangle_joins_top_corners_and_apex() {
        let m = build_one(Vec2::zero());
        assert_eq!(&m.indices[6..], &[3, 2, 4]);

        let top_left = m.positions[3];
        let top_right = m.positions[2];
        assert_eq!(top_left[1], top_right[1]);
        assert!(top_left[0] < top_right[0]);
    }

    #[test]
    fn bar_corners_follow_dims() {
        let c = Vec2::new(-0.25, 0.0);
        let d = OneDims::default();
        let m = build_one_with(c, d);
        assert_eq!(m.positions[0], [c.x - d.half_base, c.y - d.half_height + d.lift, 0.0, 1.0]);
        assert_eq!(m.positions[2], [c.x + d.half_base, c.y + d.half_height + d.lift, 0.0, 1.0]);
        assert_eq!(m.positions[4], [c.x + d.flag.x, c.y + d.flag.y, 0.0, 1.0]);
    }

    #[test]
    fn every_vertex_is_blue() {
        let m = build_one(Vec2::new(0.25, 0.0));
        assert!(m.colors.iter().all(|c| *c == [0.0, 0.0, 1.0, 1.0]));
    }
}
