//! WorldView: maps a rendered pixel buffer into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::pixels::PixelBuffer;
use crate::types::Rgb;
use tileworld_core::View;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Lays the picture out inside the terminal, with a status line underneath.
#[derive(Debug, Clone)]
pub struct WorldView {
    /// Fixed downscale factor; `None` picks the smallest one that fits.
    scale: Option<u16>,
    status: bool,
}

impl Default for WorldView {
    fn default() -> Self {
        Self {
            scale: None,
            status: true,
        }
    }
}

impl WorldView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always sample every `scale`-th pixel.
    pub fn with_scale(mut self, scale: u16) -> Self {
        self.scale = Some(scale.max(1));
        self
    }

    pub fn without_status(mut self) -> Self {
        self.status = false;
        self
    }

    fn status_rows(&self) -> u16 {
        u16::from(self.status)
    }

    /// Downscale factor used for a picture of `width x height` pixels.
    pub fn scale_for(&self, width: i32, height: i32, viewport: Viewport) -> u16 {
        if let Some(s) = self.scale {
            return s;
        }
        let cols = i32::from(viewport.width);
        let rows = i32::from(viewport.height.saturating_sub(self.status_rows()));
        let mut s = 1;
        while s < width.max(height) {
            let (w, h) = sampled_size(width, height, s);
            if w <= cols && (h + 1) / 2 <= rows {
                break;
            }
            s += 1;
        }
        s.clamp(1, i32::from(u16::MAX)) as u16
    }

    /// Render `pixels` (the view's picture) into an existing framebuffer.
    ///
    /// Callers can reuse the framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(
        &self,
        pixels: &PixelBuffer,
        view: &View,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let s = i32::from(self.scale_for(pixels.width(), pixels.height(), viewport));
        let (pic_w, pic_h) = sampled_size(pixels.width(), pixels.height(), s);
        let pic_rows = (pic_h + 1) / 2;

        let avail_rows = i32::from(viewport.height.saturating_sub(self.status_rows()));
        let start_x = (i32::from(viewport.width) - pic_w).max(0) / 2;
        let start_y = (avail_rows - pic_rows).max(0) / 2;

        for ty in 0..pic_rows.min(avail_rows) {
            for tx in 0..pic_w.min(i32::from(viewport.width)) {
                let top = pixels.get(tx * s, 2 * ty * s).unwrap_or(Rgb::BLACK);
                let bottom = pixels.get(tx * s, (2 * ty + 1) * s).unwrap_or(Rgb::BLACK);
                fb.set(
                    (start_x + tx) as u16,
                    (start_y + ty) as u16,
                    Cell::half_block(top, bottom),
                );
            }
        }

        if self.status && viewport.height > 0 {
            self.draw_status(fb, view, viewport.height - 1);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, pixels: &PixelBuffer, view: &View, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(pixels, view, viewport, &mut fb);
        fb
    }

    fn draw_status(&self, fb: &mut FrameBuffer, view: &View, y: u16) {
        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::default();

        let off = view.offset();
        let top_left = view.top_left();
        let mut x = 0;
        for (name, text) in [
            ("off", format!("{},{}", off.x, off.y)),
            ("cell", format!("{},{}", top_left.col, top_left.row)),
            ("max", format!("{},{}", view.max().x, view.max().y)),
        ] {
            fb.put_str(x, y, name, label);
            x = x.saturating_add(name.len() as u16 + 1);
            fb.put_str(x, y, &text, value);
            x = x.saturating_add(text.len() as u16 + 2);
        }
        fb.put_str(x, y, "q quit", CellStyle { bold: false, ..label });
    }
}

/// Size of the picture after keeping every `s`-th pixel on both axes.
fn sampled_size(width: i32, height: i32, s: i32) -> (i32, i32) {
    ((width + s - 1) / s, (height + s - 1) / s)
}
