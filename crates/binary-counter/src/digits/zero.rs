use std::f32::consts::TAU;

use counter_engine::coords::Vec2;
use counter_engine::paint::Color;
use counter_engine::scene::{MeshData, PrimitiveMode};

/// Points sampled on each ellipse of a "0" glyph.
pub const DEFAULT_EXTERNAL_POINTS: u16 = 16;

/// Most points a ring can take (two vertices per point).
pub const MAX_EXTERNAL_POINTS: u16 = (MeshData::MAX_VERTICES / 2) as u16;

/// Half-axes of the two ellipses bounding the "0" ring, in NDC.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RingRadii {
    pub inner: Vec2,
    pub outer: Vec2,
}

impl Default for RingRadii {
    /// Tall ellipses, roughly matching the "1" glyph's height.
    fn default() -> Self {
        Self {
            inner: Vec2::new(0.1, 0.6),
            outer: Vec2::new(0.15, 0.7),
        }
    }
}

/// Builds the "0" glyph: a triangle strip between two concentric ellipses.
///
/// For `i in 0..k`, with `θ = i · 2π/k`, emits an inner vertex then an outer
/// vertex, so vertex `2i` is inner and `2i + 1` is outer. The strip walks the
/// pairs in order and repeats `0, 1` to close the ring.
///
/// Output: `2k` vertices, `2k + 2` indices, all red. `k` above
/// [`MAX_EXTERNAL_POINTS`] is clamped; `k == 0` yields an empty mesh.
pub fn build_zero(center: Vec2, external_points: u16, radii: RingRadii) -> MeshData {
    if external_points == 0 {
        return MeshData::new(PrimitiveMode::TriangleStrip);
    }
    let k = external_points.min(MAX_EXTERNAL_POINTS) as usize;

    let mut mesh = MeshData::with_capacity(PrimitiveMode::TriangleStrip, 2 * k, 2 * k + 2);
    let step = TAU / k as f32;

    for i in 0..k {
        let (sin, cos) = (step * i as f32).sin_cos();

        let inner = mesh.push_vertex(
            center + Vec2::new(radii.inner.x * cos, radii.inner.y * sin),
            Color::RED,
        );
        let outer = mesh.push_vertex(
            center + Vec2::new(radii.outer.x * cos, radii.outer.y * sin),
            Color::RED,
        );
        mesh.push_indices(&[inner, outer]);
    }
    mesh.push_indices(&[0, 1]);

    mesh
}
