//! Errors from loading, writing and dumping sprite sheets.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("failed to load sprite sheet {}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write image {}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to create tile directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Core(#[from] tileworld_core::Error),
}

pub type Result<T> = std::result::Result<T, SheetError>;
