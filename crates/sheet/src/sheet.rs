//! Sprite sheets decoded with the `image` crate.

use std::path::{Path, PathBuf};

use image::{imageops, RgbaImage};

use crate::error::{Result, SheetError};
use crate::types::{Rect, Rgb};
use tileworld_core::Image;

/// A decoded sprite sheet held as 8-bit RGBA.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    image: RgbaImage,
    path: Option<PathBuf>,
}

impl SpriteSheet {
    /// Decode the image at `path`. The format is guessed from the file
    /// contents.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path)
            .map_err(|source| SheetError::Load {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();
        tracing::info!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "loaded sprite sheet"
        );
        Ok(Self {
            image,
            path: Some(path.to_path_buf()),
        })
    }

    /// Wrap an image that is already in memory.
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image, path: None }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// File the sheet was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Copy the pixels inside `rect` (clipped to the sheet) into a new image,
    /// alpha included.
    pub fn crop(&self, rect: Rect) -> RgbaImage {
        let r = rect.intersect(&Image::bounds(self));
        imageops::crop_imm(
            &self.image,
            r.min.x as u32,
            r.min.y as u32,
            r.width() as u32,
            r.height() as u32,
        )
        .to_image()
    }
}

impl Image for SpriteSheet {
    fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.image.width() as i32, self.image.height() as i32)
    }

    fn pixel(&self, x: i32, y: i32) -> Rgb {
        let [r, g, b, _] = self.image.get_pixel(x as u32, y as u32).0;
        Rgb::new(r, g, b)
    }
}
