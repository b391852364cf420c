//! Coordinate types shared between geometry builders and renderers.
//!
//! Canonical space for geometry is NDC:
//! - range −1..1 on both axes
//! - origin at the window center
//! - +X right, +Y up
//!
//! Vertices are emitted directly in NDC; the vertex shader passes them through.

mod vec2;

pub use vec2::Vec2;
