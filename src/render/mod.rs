//! Rendering module for blockforge.
//!
//! This module turns synthesized layouts into pixels on a `Surface` and
//! encodes finished surfaces to PNG.

mod flat;
mod iso;
mod png;
mod surface;

pub use flat::{draw_block, draw_flat};
pub use iso::{draw_iso_block, draw_isometric, screen_position};
pub use png::{write_png, Png, SurfaceEncoder};
pub use surface::Surface;
