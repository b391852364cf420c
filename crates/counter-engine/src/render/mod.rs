//! GPU rendering subsystem.
//!
//! - `shader`: loads WGSL sources from disk and compiles them into a `ShaderProgram`
//! - `mesh`: uploads `scene::MeshData` into GPU buffers, links the pipelines and draws them
//!
//! Convention: geometry is already in NDC; the vertex shader passes positions
//! through unchanged (location 0 = position, location 1 = color).

mod ctx;
pub mod mesh;
pub mod shader;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::{Mesh, MeshRenderer};
pub use shader::{LinkError, ShaderError, ShaderPaths, ShaderProgram, ShaderSources};
