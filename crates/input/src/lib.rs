//! Keyboard input for the tile-world viewer.
//!
//! Independent of any UI framework: [`map`] turns `crossterm` key events into
//! scroll [`crate::types::Direction`]s, and [`ScrollInput`] tracks which
//! directions are held so the viewer can scroll smoothly, including on
//! terminals that never report key releases.

pub mod handler;
pub mod map;

pub use tileworld_types as types;

pub use handler::ScrollInput;
pub use map::{direction_for_key, should_quit};
