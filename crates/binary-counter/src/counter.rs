use crate::digits::{clamp_width, DigitLayout};

/// Value shown by the lab, wrapping at `2^bits`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryCounter {
    value: u32,
    modulus: u32,
}

impl BinaryCounter {
    /// Counter over `bits` bits, starting at zero. `bits` is clamped like a
    /// layout width, see [`clamp_width`].
    pub fn new(bits: u32) -> Self {
        Self {
            value: 0,
            modulus: 1 << clamp_width(bits),
        }
    }

    /// Counter wrapping exactly where `layout` runs out of digits.
    pub fn for_layout(layout: &DigitLayout) -> Self {
        Self::new(layout.width())
    }

    #[inline]
    pub fn value(&self) -> u32 {
        self.value
    }

    #[inline]
    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    /// Increments the value, wrapping to zero after `modulus - 1`. Returns the new value.
    pub fn advance(&mut self) -> u32 {
        self.value = (self.value + 1) % self.modulus;
        self.value
    }

    pub fn set(&mut self, value: u32) {
        self.value = value % self.modulus;
    }
}

impl Default for BinaryCounter {
    fn default() -> Self {
        Self::new(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(BinaryCounter::default().value(), 0);
        assert_eq!(BinaryCounter::default().modulus(), 16);
    }

    #[test]
    fn wraps_after_fifteen() {
        let mut c = BinaryCounter::default();
        for expected in 1..16 {
            assert_eq!(c.advance(), expected);
        }
        assert_eq!(c.advance(), 0);
    }

    #[test]
    fn set_reduces_modulo() {
        let mut c = BinaryCounter::default();
        c.set(16);
        assert_eq!(c.value(), 0);
        c.set(21);
        assert_eq!(c.value(), 5);
    }

    #[test]
    fn width_is_clamped() {
        assert_eq!(BinaryCounter::new(0).modulus(), 2);
        assert_eq!(BinaryCounter::new(40).modulus(), 1 << 31);
    }

    #[test]
    fn wraps_where_the_layout_runs_out_of_digits() {
        use crate::digits::build_scene;

        for bits in [0, 1, 4, 31, 40] {
            let layout = DigitLayout { bits, ..Default::default() };
            let counter = BinaryCounter::for_layout(&layout);
            let digits = build_scene(0, &layout).len() as u32;
            assert_eq!(counter.modulus(), 1 << digits, "bits = {bits}");
        }
    }
}
