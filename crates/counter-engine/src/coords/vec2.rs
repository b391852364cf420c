use core::ops::{Add, Mul, Sub};

/// 2D point or offset in normalized device coordinates.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Homogeneous position `(x, y, 0, 1)` as uploaded to vertex buffers.
    #[inline]
    pub const fn to_homogeneous(self) -> [f32; 4] {
        [self.x, self.y, 0.0, 1.0]
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn homogeneous_has_zero_z_and_unit_w() {
        assert_eq!(Vec2::new(0.5, -0.25).to_homogeneous(), [0.5, -0.25, 0.0, 1.0]);
    }

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(0.5, 0.5);
        assert_eq!(a + b, Vec2::new(1.5, 2.5));
        assert_eq!(a - b, Vec2::new(0.5, 1.5));
        assert_eq!(b * 2.0, Vec2::new(1.0, 1.0));
    }
}
