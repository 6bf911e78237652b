//! Software compositing target: a plain RGB pixel buffer.

use crate::types::{Rect, Rgb};
use tileworld_core::{Canvas, Image};

/// Row-major RGB pixels. The world is drawn here first and then converted to
/// terminal cells by [`crate::WorldView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: i32,
    height: i32,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    /// Panics if either side is negative.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(
            width >= 0 && height >= 0,
            "pixel buffer size must not be negative: {width}x{height}"
        );
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Color at `(x, y)`, or `None` outside the buffer.
    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }
}

impl Canvas for PixelBuffer {
    fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = color;
        }
    }
}

impl Image for PixelBuffer {
    fn bounds(&self) -> Rect {
        Canvas::bounds(self)
    }

    fn pixel(&self, x: i32, y: i32) -> Rgb {
        self.get(x, y).unwrap_or_default()
    }
}
