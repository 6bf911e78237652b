//! Terminal presentation for tile worlds.
//!
//! The world is composited into a [`PixelBuffer`] by `tileworld_core::draw_view`,
//! converted into character cells by [`WorldView`] (two pixels per cell with
//! half-block glyphs), and flushed by [`TerminalRenderer`].
//!
//! Only [`TerminalRenderer`] touches the terminal; everything else is pure and
//! unit-tested.

pub mod fb;
pub mod pixels;
pub mod renderer;
pub mod throttle;
pub mod world_view;

pub use tileworld_core as core;
pub use tileworld_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, HALF_BLOCK};
pub use pixels::PixelBuffer;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use throttle::RedrawGate;
pub use world_view::{Viewport, WorldView};
