//! The scrollable camera over the world.
//!
//! A [`View`] is a fixed-size pixel window whose top-left corner sits at a
//! pixel offset into the world. The offset never leaves `[0, max]` on either
//! axis, where `max` is the world extent minus the view size.

use std::ops::Range;

use crate::grid::{loc, CellGeometry, Location};
use crate::types::{pt, Point};

/// Scroll state of the visible window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    geometry: CellGeometry,
    width: i32,
    height: i32,
    cols: usize,
    rows: usize,
    off: Point,
    max: Point,
}

/// Snapshot of what a [`View`] currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Camera {
    /// Top-left visible cell.
    pub top_left: Location,
    /// Pixel offset into the top-left cell.
    pub offset: Point,
    /// Number of columns and rows that must be drawn, including a partially
    /// visible trailing column/row.
    pub cols: usize,
    pub rows: usize,
}

impl View {
    /// Create a view of `width x height` pixels over a world whose
    /// bottom-right corner is `world_end` (the origin is `(0, 0)`).
    ///
    /// If the view is larger than the world on an axis, the offset stays at 0
    /// on that axis.
    ///
    /// Panics if `width` or `height` is negative.
    pub fn new(width: i32, height: i32, world_end: Point, geometry: CellGeometry) -> Self {
        assert!(
            width >= 0 && height >= 0,
            "view size must not be negative: {width}x{height}"
        );
        let max = world_end - pt(width, height);
        Self {
            geometry,
            width,
            height,
            cols: (width / geometry.width()) as usize,
            rows: (height / geometry.height()) as usize,
            off: Point::ZERO,
            max: pt(max.x.max(0), max.y.max(0)),
        }
    }

    pub fn geometry(&self) -> CellGeometry {
        self.geometry
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whole columns that fit in the view.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whole rows that fit in the view.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Current scroll offset in pixels.
    pub fn offset(&self) -> Point {
        self.off
    }

    /// Largest reachable offset.
    pub fn max(&self) -> Point {
        self.max
    }

    /// Scroll by `delta`, then clamp each axis to `[0, max]`.
    ///
    /// Both axes are added before either is clamped, and they clamp
    /// independently: a diagonal move against one wall still travels the full
    /// distance along the other axis.
    pub fn move_by(&mut self, delta: Point) {
        let off = self.off.saturating_add(delta);
        self.off = self.clamp(off);
    }

    /// Jump to the absolute offset `off`, clamped like [`View::move_by`].
    pub fn scroll_to(&mut self, off: Point) {
        self.off = self.clamp(off);
    }

    fn clamp(&self, off: Point) -> Point {
        pt(off.x.clamp(0, self.max.x), off.y.clamp(0, self.max.y))
    }

    /// First visible column.
    pub fn col_first(&self) -> usize {
        (self.off.x / self.geometry.width()) as usize
    }

    /// First visible row.
    pub fn row_first(&self) -> usize {
        (self.off.y / self.geometry.height()) as usize
    }

    /// One past the last column to draw. Includes the partially visible
    /// column at the right edge when the offset is not on a cell boundary.
    pub fn col_last(&self) -> usize {
        let partial = usize::from(self.x() != 0);
        self.col_first() + self.cols + partial
    }

    /// One past the last row to draw; see [`View::col_last`].
    pub fn row_last(&self) -> usize {
        let partial = usize::from(self.y() != 0);
        self.row_first() + self.rows + partial
    }

    /// Horizontal pixel offset into the first visible column.
    pub fn x(&self) -> i32 {
        self.off.x % self.geometry.width()
    }

    /// Vertical pixel offset into the first visible row.
    pub fn y(&self) -> i32 {
        self.off.y % self.geometry.height()
    }

    pub fn visible_cols(&self) -> Range<usize> {
        self.col_first()..self.col_last()
    }

    pub fn visible_rows(&self) -> Range<usize> {
        self.row_first()..self.row_last()
    }

    pub fn top_left(&self) -> Location {
        loc(self.col_first(), self.row_first())
    }

    pub fn camera(&self) -> Camera {
        Camera {
            top_left: self.top_left(),
            offset: pt(self.x(), self.y()),
            cols: self.col_last() - self.col_first(),
            rows: self.row_last() - self.row_first(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells32() -> CellGeometry {
        CellGeometry::new(32, 32).unwrap()
    }

    fn demo_view() -> View {
        View::new(192, 192, pt(288, 352), cells32())
    }

    #[test]
    fn derives_cols_rows_and_max() {
        let v = demo_view();
        assert_eq!((v.cols(), v.rows()), (6, 6));
        assert_eq!(v.max(), pt(96, 160));
        assert_eq!(v.offset(), Point::ZERO);
    }

    #[test]
    fn move_clamps_to_max() {
        let mut v = demo_view();
        v.move_by(pt(1000, 1000));
        assert_eq!(v.offset(), pt(96, 160));
        assert_eq!(v.col_first(), 3);
        assert_eq!(v.row_first(), 5);
        assert_eq!((v.x(), v.y()), (0, 0));
    }

    #[test]
    fn move_clamps_to_zero() {
        let mut v = demo_view();
        v.move_by(pt(10, 10));
        v.move_by(pt(-50, -3));
        assert_eq!(v.offset(), pt(0, 7));
    }

    #[test]
    fn diagonal_move_keeps_free_axis() {
        let mut v = demo_view();
        v.move_by(pt(90, 0));
        v.move_by(pt(20, 20));
        assert_eq!(v.offset(), pt(96, 20));
    }

    #[test]
    fn extreme_deltas_do_not_overflow() {
        let mut v = demo_view();
        v.move_by(pt(i32::MAX, i32::MAX));
        v.move_by(pt(i32::MAX, i32::MAX));
        assert_eq!(v.offset(), pt(96, 160));
        v.move_by(pt(i32::MIN, i32::MIN));
        assert_eq!(v.offset(), Point::ZERO);
    }

    #[test]
    fn view_larger_than_world_is_pinned() {
        let mut v = View::new(400, 100, pt(288, 352), cells32());
        assert_eq!(v.max(), pt(0, 252));
        v.move_by(pt(5, 5));
        assert_eq!(v.offset(), pt(0, 5));
    }

    #[test]
    fn partial_offset_adds_trailing_cell() {
        let mut v = demo_view();
        assert_eq!(v.col_last() - v.col_first(), 6);
        v.move_by(pt(2, 0));
        assert_eq!(v.col_last() - v.col_first(), 7);
        assert_eq!(v.row_last() - v.row_first(), 6);
        assert_eq!(v.x(), 2);
        v.move_by(pt(30, 33));
        assert_eq!(v.col_first(), 1);
        assert_eq!(v.x(), 0);
        assert_eq!(v.col_last() - v.col_first(), 6);
        assert_eq!(v.row_last() - v.row_first(), 7);
        assert_eq!(v.y(), 1);
    }

    #[test]
    fn non_multiple_view_size_truncates_cols() {
        let v = View::new(200, 100, pt(288, 352), cells32());
        assert_eq!((v.cols(), v.rows()), (6, 3));
        assert_eq!(v.max(), pt(88, 252));
    }

    #[test]
    fn scroll_to_is_clamped() {
        let mut v = demo_view();
        v.scroll_to(pt(48, -4));
        assert_eq!(v.offset(), pt(48, 0));
        v.scroll_to(pt(500, 500));
        assert_eq!(v.offset(), v.max());
    }

    #[test]
    fn camera_snapshot_matches_accessors() {
        let mut v = View::new(224, 224, pt(480, 480), cells32());
        v.scroll_to(pt(48, 48));
        assert_eq!(
            v.camera(),
            Camera {
                top_left: loc(1, 1),
                offset: pt(16, 16),
                cols: 8,
                rows: 8,
            }
        );
    }
}
