//! An RGBA image used as a drawing target and written out as PNG.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::error::{Result, SheetError};
use crate::types::{Rect, Rgb};
use tileworld_core::{Canvas, Image};

/// Opaque RGBA drawing surface backed by an [`RgbaImage`].
#[derive(Debug, Clone)]
pub struct ImageCanvas {
    image: RgbaImage,
}

impl ImageCanvas {
    /// A `width x height` canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, to_rgba(background)),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Encode the canvas to `path`; the format follows the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.image.save(path).map_err(|source| SheetError::Save {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "wrote image");
        Ok(())
    }
}

fn to_rgba(c: Rgb) -> Rgba<u8> {
    Rgba([c.r, c.g, c.b, 0xFF])
}

impl Canvas for ImageCanvas {
    fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.image.width() as i32, self.image.height() as i32)
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        self.image.put_pixel(x as u32, y as u32, to_rgba(color));
    }
}

impl Image for ImageCanvas {
    fn bounds(&self) -> Rect {
        Canvas::bounds(self)
    }

    fn pixel(&self, x: i32, y: i32) -> Rgb {
        let [r, g, b, _] = self.image.get_pixel(x as u32, y as u32).0;
        Rgb::new(r, g, b)
    }
}
