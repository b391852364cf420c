//! Counter engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the binary counter:
//! window/event loop, device and surface, frame timing, keyboard input, shader
//! loading and the indexed mesh renderer.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
