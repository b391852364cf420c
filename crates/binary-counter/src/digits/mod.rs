//! Digit geometry builder.
//!
//! Turns an integer into per-bit glyph meshes. Everything here is plain
//! arithmetic over fixed inputs: no GPU access, no failure modes.

mod bits;
mod layout;
mod one;
mod zero;

pub use bits::{bits_to_decimal, decimal_to_bits, Digit};
pub use layout::{build_scene, clamp_width, DigitGeometry, DigitLayout, MAX_BITS};
pub use one::{build_one, build_one_with, OneDims, ONE_INDEX_COUNT, ONE_VERTEX_COUNT};
pub use zero::{build_zero, RingRadii, DEFAULT_EXTERNAL_POINTS, MAX_EXTERNAL_POINTS};
