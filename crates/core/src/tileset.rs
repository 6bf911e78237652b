//! Tile sets: one sprite sheet cut into equally sized tiles.
//!
//! Tiles are numbered from 1, left to right and then top to bottom. A sheet
//! whose size is not a multiple of the tile size keeps its trailing partial
//! column/row unaddressable: `last_id()` only counts whole tiles.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{check_dimensions, Result};
use crate::grid::CellGeometry;
use crate::image::{Image, SubImage};
use crate::types::{Point, Rect, TileId};

/// A sprite sheet indexed into tiles of `tile_width x tile_height` pixels.
///
/// The sheet is borrowed, and every tile handed out is a [`SubImage`] tied to
/// that same borrow. Tile views are memoized per id; the memo lives in a
/// `RefCell`, so a `TileSet` must stay on one thread.
pub struct TileSet<'a, I: ?Sized> {
    sheet: &'a I,
    tile_width: i32,
    tile_height: i32,
    origin: Point,
    width: i32,
    height: i32,
    tiles: RefCell<HashMap<TileId, SubImage<'a, I>>>,
}

impl<'a, I: Image + ?Sized> TileSet<'a, I> {
    /// Index `sheet` into tiles of the given size.
    ///
    /// Fails with [`crate::Error::InvalidDimensions`] if either side is not
    /// positive.
    pub fn new(sheet: &'a I, tile_width: i32, tile_height: i32) -> Result<Self> {
        check_dimensions(tile_width, tile_height)?;
        let bounds = sheet.bounds();
        Ok(Self {
            sheet,
            tile_width,
            tile_height,
            origin: bounds.min,
            width: bounds.width(),
            height: bounds.height(),
            tiles: RefCell::new(HashMap::new()),
        })
    }

    /// Index `sheet` with tiles the size of one grid cell.
    pub fn with_geometry(sheet: &'a I, geometry: CellGeometry) -> Self {
        let bounds = sheet.bounds();
        Self {
            sheet,
            tile_width: geometry.width(),
            tile_height: geometry.height(),
            origin: bounds.min,
            width: bounds.width(),
            height: bounds.height(),
            tiles: RefCell::new(HashMap::new()),
        }
    }

    pub fn sheet(&self) -> &'a I {
        self.sheet
    }

    pub fn tile_width(&self) -> i32 {
        self.tile_width
    }

    pub fn tile_height(&self) -> i32 {
        self.tile_height
    }

    /// Whole tiles per sheet row.
    pub fn cols(&self) -> i32 {
        self.width / self.tile_width
    }

    /// Whole tiles per sheet column.
    pub fn rows(&self) -> i32 {
        self.height / self.tile_height
    }

    /// The highest addressable id, or [`TileId::NONE`] for a sheet smaller
    /// than one tile.
    pub fn last_id(&self) -> TileId {
        TileId((self.cols() * self.rows()) as u32)
    }

    /// Whether `id` addresses a tile of this sheet.
    pub fn contains(&self, id: TileId) -> bool {
        id.is_valid() && id <= self.last_id()
    }

    /// Every addressable id in order.
    pub fn ids(&self) -> impl Iterator<Item = TileId> {
        (1..=self.last_id().get()).map(TileId)
    }

    /// Bounding rectangle of tile `id` within the sheet.
    ///
    /// Panics for [`TileId::NONE`]. Ids past [`TileSet::last_id`] are not
    /// checked here and yield rectangles below the sheet.
    pub fn tile_rect(&self, id: TileId) -> Rect {
        assert!(id.is_valid(), "tile id 0 does not name a tile");
        let cols = self.cols();
        assert!(cols > 0, "sprite sheet is narrower than one tile");
        let i = (id.get() - 1) as i32;
        let col = i % cols;
        let row = i / cols;
        let min = self.origin + Point::new(col * self.tile_width, row * self.tile_height);
        Rect::from_origin_size(min, self.tile_width, self.tile_height)
    }

    /// The tile image for `id`, as a view into the sheet.
    ///
    /// Panics if `id` is outside `1..=last_id()`.
    pub fn tile(&self, id: TileId) -> SubImage<'a, I> {
        match self.get(id) {
            Some(tile) => tile,
            None => panic!(
                "tile id {id} out of range: sheet holds 1..={}",
                self.last_id()
            ),
        }
    }

    /// Checked form of [`TileSet::tile`].
    pub fn get(&self, id: TileId) -> Option<SubImage<'a, I>> {
        if !self.contains(id) {
            return None;
        }
        if let Some(tile) = self.tiles.borrow().get(&id) {
            return Some(*tile);
        }
        let rect = self.tile_rect(id);
        tracing::trace!(%id, %rect, "tile cache miss");
        let tile = SubImage::new(self.sheet, rect);
        self.tiles.borrow_mut().insert(id, tile);
        Some(tile)
    }

    /// Number of memoized tile views.
    pub fn cached(&self) -> usize {
        self.tiles.borrow().len()
    }
}
