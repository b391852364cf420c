use counter_engine::coords::Vec2;
use counter_engine::scene::MeshData;

use super::bits::{decimal_to_bits, Digit};
use super::one::build_one;
use super::zero::{build_zero, RingRadii, DEFAULT_EXTERNAL_POINTS};

/// Widest counter that still fits a `u32` modulus.
pub const MAX_BITS: u32 = 31;

/// Clamps a requested counter width to `1..=MAX_BITS`.
pub fn clamp_width(bits: u32) -> u32 {
    bits.clamp(1, MAX_BITS)
}

/// Where and how the row of digits is laid out.
///
/// Bit 0 sits at `first_center`; each following bit steps `spacing` to the
/// left, so the row reads most-significant first from left to right.
/// `bits` is a request; [`DigitLayout::width`] is what gets drawn and counted.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DigitLayout {
    pub bits: u32,
    pub first_center: Vec2,
    pub spacing: f32,
    pub external_points: u16,
    pub ring: RingRadii,
}

impl Default for DigitLayout {
    fn default() -> Self {
        Self {
            bits: 4,
            first_center: Vec2::new(0.75, 0.0),
            spacing: 0.5,
            external_points: DEFAULT_EXTERNAL_POINTS,
            ring: RingRadii::default(),
        }
    }
}

impl DigitLayout {
    /// Center of the glyph for bit `index`.
    pub fn center(&self, index: usize) -> Vec2 {
        self.first_center - Vec2::new(index as f32 * self.spacing, 0.0)
    }

    /// Number of digits drawn, `bits` clamped to `1..=MAX_BITS`.
    pub fn width(&self) -> u32 {
        clamp_width(self.bits)
    }
}

/// Geometry for one digit of the row.
#[derive(Debug, Clone, PartialEq)]
pub struct DigitGeometry {
    pub bit_index: usize,
    pub digit: Digit,
    pub center: Vec2,
    pub mesh: MeshData,
}

/// Builds one glyph per bit of `value`, least-significant bit first.
pub fn build_scene(value: u32, layout: &DigitLayout) -> Vec<DigitGeometry> {
    decimal_to_bits(value, layout.width())
        .into_iter()
        .enumerate()
        .map(|(bit_index, digit)| {
            let center = layout.center(bit_index);
            let mesh = match digit {
                Digit::Zero => build_zero(center, layout.external_points, layout.ring),
                Digit::One => build_one(center),
            };
            DigitGeometry { bit_index, digit, center, mesh }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use counter_engine::scene::PrimitiveMode;

    #[test]
    fn one_geometry_per_bit() {
        for v in 0..16 {
            assert_eq!(build_scene(v, &DigitLayout::default()).len(), 4);
        }
    }

    #[test]
    fn five_places_digits_right_to_left() {
        let scene = build_scene(5, &DigitLayout::default());

        let digits: Vec<Digit> = scene.iter().map(|g| g.digit).collect();
        assert_eq!(digits, vec![Digit::One, Digit::Zero, Digit::One, Digit::Zero]);

        let xs: Vec<f32> = scene.iter().map(|g| g.center.x).collect();
        assert_eq!(xs, vec![0.75, 0.25, -0.25, -0.75]);
        assert!(scene.iter().all(|g| g.center.y == 0.0));
    }

    #[test]
    fn glyph_kind_matches_digit() {
        let layout = DigitLayout::default();
        for g in build_scene(5, &layout) {
            match g.digit {
                Digit::One => {
                    assert_eq!(g.mesh.mode, PrimitiveMode::TriangleList);
                    assert_eq!(g.mesh.index_count(), 9);
                }
                Digit::Zero => {
                    assert_eq!(g.mesh.mode, PrimitiveMode::TriangleStrip);
                    assert_eq!(g.mesh.index_count(), 2 * layout.external_points as usize + 2);
                }
            }
        }
    }

    #[test]
    fn bit_indices_are_ordered() {
        let scene = build_scene(9, &DigitLayout::default());
        let idx: Vec<usize> = scene.iter().map(|g| g.bit_index).collect();
        assert_eq!(idx, vec![0, 1, 2, 3]);
    }

    #[test]
    fn out_of_range_widths_are_clamped() {
        let zero = DigitLayout { bits: 0, ..Default::default() };
        assert_eq!(zero.width(), 1);
        assert_eq!(build_scene(1, &zero).len(), 1);

        let wide = DigitLayout { bits: 40, ..Default::default() };
        assert_eq!(wide.width(), MAX_BITS);
        assert_eq!(build_scene(0, &wide).len(), MAX_BITS as usize);
    }
}
