//! Time subsystem.
//!
//! Frame timing and wall-clock intervals, decoupled from the runtime:
//! - one `FrameClock` per window; `tick()` once per presented frame
//! - `Ticker` fires once per fixed period (the counter's one-second step)

mod frame_clock;
mod ticker;

pub use frame_clock::{FrameClock, FrameTime};
pub use ticker::Ticker;
