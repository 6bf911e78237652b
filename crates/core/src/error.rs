//! Error types for the coordinate core.
//!
//! Only construction can fail recoverably. Out-of-range grid or tile access is
//! a programming error and panics instead (see [`crate::grid::Map`] and
//! [`crate::tileset::TileSet::tile`]).

/// Errors surfaced while building core values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid dimensions {width}x{height}: width and height must be positive")]
    InvalidDimensions { width: i32, height: i32 },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Validate a width/height pair shared by cells and tiles.
pub(crate) fn check_dimensions(width: i32, height: i32) -> Result<()> {
    if width <= 0 || height <= 0 {
        return Err(Error::InvalidDimensions { width, height });
    }
    Ok(())
}
