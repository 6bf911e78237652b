//! Image-file backend for the tile world.
//!
//! Decodes sprite sheets with the `image` crate and exposes them to the core
//! through [`tileworld_core::Image`], provides a PNG-writable
//! [`tileworld_core::Canvas`], and implements the tile dump used by the
//! `tiledump` tool.

pub mod canvas;
pub mod dump;
pub mod error;
pub mod sheet;

pub use tileworld_types as types;

pub use canvas::ImageCanvas;
pub use dump::{dump_sheet, dump_tiles, tile_dir, tile_file_name};
pub use error::{Result, SheetError};
pub use sheet::SpriteSheet;
