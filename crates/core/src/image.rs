//! Image capabilities the core draws with.
//!
//! The core never decodes or displays anything itself. It reads pixels through
//! [`Image`] and writes them through [`Canvas`]; backends (the `image` crate
//! adapter, the terminal pixel buffer) implement these two traits.

use crate::types::{Point, Rect, Rgb};

/// A readable rectangle of pixels.
pub trait Image {
    /// Pixel bounds. Usually starts at the origin, but sub-images keep the
    /// coordinates of their parent.
    fn bounds(&self) -> Rect;

    /// Color at `(x, y)`. Only called for points inside [`Image::bounds`].
    fn pixel(&self, x: i32, y: i32) -> Rgb;

    /// A borrowed view of the part of `self` inside `rect`.
    fn sub_image(&self, rect: Rect) -> SubImage<'_, Self> {
        SubImage::new(self, rect)
    }
}

/// A read-only window into a parent image.
///
/// Nothing is copied: the view is the parent reference plus a rectangle, and
/// the borrow keeps the parent alive and unmodified for as long as the view
/// exists.
pub struct SubImage<'a, I: ?Sized> {
    parent: &'a I,
    rect: Rect,
}

impl<'a, I: Image + ?Sized> SubImage<'a, I> {
    /// View of `rect` clipped to the parent's bounds.
    pub fn new(parent: &'a I, rect: Rect) -> Self {
        let rect = rect.intersect(&parent.bounds());
        Self { parent, rect }
    }

    pub fn parent(&self) -> &'a I {
        self.parent
    }
}

impl<I: ?Sized> Clone for SubImage<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: ?Sized> Copy for SubImage<'_, I> {}

impl<I: ?Sized> std::fmt::Debug for SubImage<'_, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubImage").field("rect", &self.rect).finish()
    }
}

impl<I: Image + ?Sized> Image for SubImage<'_, I> {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn pixel(&self, x: i32, y: i32) -> Rgb {
        debug_assert!(self.rect.contains(Point::new(x, y)));
        self.parent.pixel(x, y)
    }
}

/// A writable pixel surface.
pub trait Canvas {
    fn bounds(&self) -> Rect;

    /// Overwrite the pixel at `(x, y)`. Only called for points inside
    /// [`Canvas::bounds`].
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb);

    /// Paint `rect` (clipped to the canvas) with a solid color.
    fn fill(&mut self, rect: Rect, color: Rgb) {
        let r = rect.intersect(&self.bounds());
        for y in r.min.y..r.max.y {
            for x in r.min.x..r.max.x {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Copy pixels of `src` onto the destination rectangle `dr`, with `sp` in
    /// `src` aligned to `dr.min`.
    ///
    /// Paint-over semantics: destination pixels are replaced, never blended.
    /// Both rectangles are clipped, so partially visible tiles at the canvas
    /// edge are fine.
    fn blit<S: Image + ?Sized>(&mut self, dr: Rect, src: &S, sp: Point) {
        let delta = sp - dr.min;
        let dr = dr.intersect(&self.bounds());
        let sr = dr.translate(delta).intersect(&src.bounds());
        let dr = sr.translate(-delta);
        for y in dr.min.y..dr.max.y {
            for x in dr.min.x..dr.max.x {
                self.set_pixel(x, y, src.pixel(x + delta.x, y + delta.y));
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testutil::*;
    use super::*;
    use crate::types::pt;

    #[test]
    fn sub_image_keeps_parent_coordinates() {
        let sheet = Coords::new(64, 64);
        let tile = sheet.sub_image(Rect::new(32, 0, 64, 32));
        assert_eq!(tile.bounds().min, pt(32, 0));
        assert_eq!(tile.pixel(40, 5), coord_color(40, 5));
    }

    #[test]
    fn sub_image_is_clipped_to_parent() {
        let sheet = Coords::new(40, 40);
        let tile = sheet.sub_image(Rect::new(32, 32, 64, 64));
        assert_eq!(tile.bounds(), Rect::new(32, 32, 40, 40));
    }

    #[test]
    fn blit_aligns_source_point_with_destination_origin() {
        let sheet = Coords::new(64, 64);
        let mut dst = Surface::new(16, 16);
        dst.blit(Rect::new(4, 4, 8, 8), &sheet, pt(32, 16));
        assert_eq!(dst.at(4, 4), coord_color(32, 16));
        assert_eq!(dst.at(7, 7), coord_color(35, 19));
        assert_eq!(dst.at(8, 8), Rgb::BLACK);
        assert_eq!(dst.at(3, 4), Rgb::BLACK);
    }

    #[test]
    fn blit_clips_negative_destination() {
        let sheet = Coords::new(32, 32);
        let mut dst = Surface::new(8, 8);
        // Tile shifted up-left by a partial scroll: only its lower-right part shows.
        dst.blit(Rect::new(-3, -2, 5, 6), &sheet, pt(0, 0));
        assert_eq!(dst.at(0, 0), coord_color(3, 2));
        assert_eq!(dst.at(4, 5), coord_color(7, 7));
        assert_eq!(dst.at(5, 0), Rgb::BLACK);
    }

    #[test]
    fn blit_never_reads_outside_the_sub_image() {
        let sheet = Coords::new(64, 64);
        let tile = sheet.sub_image(Rect::new(0, 0, 4, 4));
        let mut dst = Surface::new(8, 8);
        dst.blit(Rect::new(0, 0, 8, 8), &tile, pt(0, 0));
        assert_eq!(dst.at(3, 3), coord_color(3, 3));
        assert_eq!(dst.at(4, 0), Rgb::BLACK);
    }

    #[test]
    fn fill_is_clipped() {
        let mut dst = Surface::new(4, 4);
        dst.fill(Rect::new(2, 2, 10, 10), Rgb::LIME);
        assert_eq!(dst.at(3, 3), Rgb::LIME);
        assert_eq!(dst.at(1, 1), Rgb::BLACK);
    }
}
