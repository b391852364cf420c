//! Scene (CPU geometry) types.
//!
//! Responsibilities:
//! - hold renderer-agnostic vertex/color/index data ready for upload
//! - record which primitive mode the indices are meant for
//!
//! Geometry builders in higher layers produce `MeshData`; `render::MeshRenderer`
//! turns it into GPU-resident `render::Mesh` values.

mod mesh;

pub use mesh::{MeshData, PrimitiveMode};
