use std::fmt;

/// One binary digit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Digit {
    Zero,
    One,
}

impl Digit {
    #[inline]
    pub const fn value(self) -> u32 {
        match self {
            Digit::Zero => 0,
            Digit::One => 1,
        }
    }
}

impl From<bool> for Digit {
    #[inline]
    fn from(bit: bool) -> Self {
        if bit { Digit::One } else { Digit::Zero }
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Converts `n` into exactly `range` bits, least-significant first.
///
/// Bits above `range` are dropped: `decimal_to_bits(17, 4)` is the same as
/// `decimal_to_bits(1, 4)`.
pub fn decimal_to_bits(mut n: u32, range: u32) -> Vec<Digit> {
    let mut bits = Vec::with_capacity(range as usize);
    for _ in 0..range {
        bits.push(Digit::from(n % 2 == 1));
        n /= 2;
    }
    bits
}

/// Reassembles an LSB-first bit sequence: `Σ bit_i · 2^i`.
pub fn bits_to_decimal(bits: &[Digit]) -> u32 {
    bits.iter()
        .enumerate()
        .fold(0, |acc, (i, d)| acc | (d.value() << i))
}
