//! Color model shared between geometry builders and renderers.

pub mod color;

pub use color::Color;
