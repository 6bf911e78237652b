//! Core tile-world logic - pure coordinate math, no I/O
//!
//! This crate maps between three spaces: sprite-sheet pixels, grid cells and
//! camera pixels. It never decodes images or talks to a terminal; those
//! backends plug in through the [`Image`] and [`Canvas`] traits.
//!
//! # Module Structure
//!
//! - [`grid`]: cell geometry, locations and the column-major [`Map`]
//! - [`tileset`]: 1-based tile ids to sprite-sheet rectangles, with a memoized view cache
//! - [`view`]: the scrollable camera and its clamping rules
//! - [`image`]: the read ([`Image`]) and write ([`Canvas`]) capabilities
//! - [`render`]: composites the visible cells onto a canvas
//!
//! # Example
//!
//! ```
//! use tileworld_core::{draw_view, loc, Canvas, Cell, CellGeometry, Image, Map, TileSet, View};
//! use tileworld_core::types::{pt, Rect, Rgb, TileId};
//!
//! struct Checker;
//! impl Image for Checker {
//!     fn bounds(&self) -> Rect { Rect::new(0, 0, 64, 32) }
//!     fn pixel(&self, x: i32, _y: i32) -> Rgb {
//!         if x < 32 { Rgb::new(0, 0, 255) } else { Rgb::new(255, 255, 0) }
//!     }
//! }
//!
//! struct Screen(Vec<Rgb>);
//! impl Canvas for Screen {
//!     fn bounds(&self) -> Rect { Rect::new(0, 0, 64, 64) }
//!     fn set_pixel(&mut self, x: i32, y: i32, c: Rgb) { self.0[(y * 64 + x) as usize] = c; }
//! }
//!
//! let cells = CellGeometry::default();
//! let sheet = Checker;
//! let tiles = TileSet::with_geometry(&sheet, cells);
//! assert_eq!(tiles.last_id(), TileId(2));
//!
//! let mut map = Map::new(4, 4);
//! map[loc(1, 0)] = Cell(TileId(2));
//!
//! let mut view = View::new(64, 64, map.pixel_end(cells), cells);
//! view.move_by(pt(1000, -5));
//! assert_eq!(view.offset(), pt(64, 0));
//!
//! let mut screen = Screen(vec![Rgb::BLACK; 64 * 64]);
//! view.scroll_to(pt(0, 0));
//! let stats = draw_view(&view, &map, &tiles, &mut screen);
//! assert_eq!(stats.drawn, 1);
//! assert_eq!(screen.0[40], Rgb::new(255, 255, 0));
//! ```

pub mod error;
pub mod grid;
pub mod image;
pub mod render;
pub mod tileset;
pub mod view;

pub use tileworld_types as types;

// Re-export commonly used types for convenience
pub use error::{Error, Result};
pub use grid::{loc, Cell, CellGeometry, Location, Map};
pub use image::{Canvas, Image, SubImage};
pub use render::{draw_view, DrawStats};
pub use tileset::TileSet;
pub use view::{Camera, View};
