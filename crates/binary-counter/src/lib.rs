//! Binary counter lab.
//!
//! Draws the value of a 4-bit counter as a row of glyphs: a red ring for each
//! `0` bit and a blue flagged bar for each `1` bit. The counter advances once
//! per second and wraps at 16.
//!
//! - [`digits`]: pure geometry (bit conversion, glyph generators, layout)
//! - [`scene`]: GPU-resident meshes for the current value
//! - [`app`]: the engine `App` driving ticks, input and rendering

pub mod app;
pub mod config;
pub mod counter;
pub mod digits;
pub mod keys;
pub mod scene;
