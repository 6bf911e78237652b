//! Grid module - cell geometry and the map container
//!
//! The world is divided into a regular grid of equally sized cells. Each cell
//! holds the id of the tile drawn there.
//! Storage is a flat, column-major `Vec<Cell>` (`col * rows + row`), so a whole
//! column is one contiguous slice and `map[col][row]` works directly.

use std::ops::{Index, IndexMut};

use crate::error::{check_dimensions, Result};
use crate::types::{pt, Point, Rect, TileId, DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH};

/// Pixel size of one grid cell.
///
/// Passed explicitly to every component that converts between pixel and grid
/// space. Both sides are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellGeometry {
    width: i32,
    height: i32,
}

impl CellGeometry {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn size(&self) -> Point {
        pt(self.width, self.height)
    }

    /// Pixel rectangle covered by the cell at `loc`.
    pub fn cell_rect(&self, loc: Location) -> Rect {
        let origin = pt(loc.col as i32 * self.width, loc.row as i32 * self.height);
        Rect::from_origin_size(origin, self.width, self.height)
    }

    /// Grid location containing the pixel `p`, or `None` left of or above the
    /// world origin.
    pub fn location_at(&self, p: Point) -> Option<Location> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        Some(loc((p.x / self.width) as usize, (p.y / self.height) as usize))
    }
}

impl Default for CellGeometry {
    fn default() -> Self {
        Self {
            width: DEFAULT_CELL_WIDTH,
            height: DEFAULT_CELL_HEIGHT,
        }
    }
}

/// One grid cell: the tile drawn there, or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell(pub TileId);

impl Cell {
    pub const EMPTY: Cell = Cell(TileId::NONE);

    pub fn new(id: TileId) -> Self {
        Self(id)
    }

    pub fn tile_id(self) -> TileId {
        self.0
    }

    pub fn is_empty(self) -> bool {
        !self.0.is_valid()
    }
}

impl From<TileId> for Cell {
    fn from(id: TileId) -> Self {
        Cell(id)
    }
}

impl From<Cell> for TileId {
    fn from(cell: Cell) -> Self {
        cell.0
    }
}

/// A grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Location {
    pub col: usize,
    pub row: usize,
}

/// Shorthand for `Location { col, row }`.
pub const fn loc(col: usize, row: usize) -> Location {
    Location { col, row }
}

/// The complete world map: `cols x rows` cells, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Map {
    /// Create a map with every cell empty.
    pub fn new(cols: usize, rows: usize) -> Self {
        // A map without columns has no row 0 to measure.
        let rows = if cols == 0 { 0 } else { rows };
        let len = cols
            .checked_mul(rows)
            .unwrap_or_else(|| panic!("map size {cols}x{rows} overflows usize"));
        Self {
            cols,
            rows,
            cells: vec![Cell::EMPTY; len],
        }
    }

    /// Create a map and fill every cell from `init`.
    pub fn from_fn(cols: usize, rows: usize, mut init: impl FnMut(Location) -> Cell) -> Self {
        let mut map = Self::new(cols, rows);
        for col in 0..map.cols {
            for row in 0..map.rows {
                map[col][row] = init(loc(col, row));
            }
        }
        map
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    fn index_of(&self, at: Location) -> Option<usize> {
        if at.col >= self.cols || at.row >= self.rows {
            return None;
        }
        Some(at.col * self.rows + at.row)
    }

    pub fn contains(&self, at: Location) -> bool {
        self.index_of(at).is_some()
    }

    /// Cell at `at`, or `None` outside the map.
    pub fn get(&self, at: Location) -> Option<Cell> {
        self.index_of(at).map(|i| self.cells[i])
    }

    pub fn get_mut(&mut self, at: Location) -> Option<&mut Cell> {
        self.index_of(at).map(move |i| &mut self.cells[i])
    }

    /// Store `cell` at `at`. Returns false if `at` is outside the map.
    pub fn set(&mut self, at: Location, cell: Cell) -> bool {
        match self.get_mut(at) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// One full column, top to bottom.
    pub fn column(&self, col: usize) -> Option<&[Cell]> {
        if col >= self.cols {
            return None;
        }
        let start = col * self.rows;
        Some(&self.cells[start..start + self.rows])
    }

    /// All cells with their locations, column by column.
    pub fn iter(&self) -> impl Iterator<Item = (Location, Cell)> + '_ {
        let rows = self.rows.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (loc(i / rows, i % rows), cell))
    }

    /// Bottom-right pixel corner of the world drawn with `geometry`.
    pub fn pixel_end(&self, geometry: CellGeometry) -> Point {
        pt(
            self.cols as i32 * geometry.width(),
            self.rows as i32 * geometry.height(),
        )
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }
}

impl Index<usize> for Map {
    type Output = [Cell];

    /// Column `col`. Panics if `col >= cols()`.
    fn index(&self, col: usize) -> &[Cell] {
        assert!(
            col < self.cols,
            "column index out of range: {col} >= {}",
            self.cols
        );
        let start = col * self.rows;
        &self.cells[start..start + self.rows]
    }
}

impl IndexMut<usize> for Map {
    fn index_mut(&mut self, col: usize) -> &mut [Cell] {
        assert!(
            col < self.cols,
            "column index out of range: {col} >= {}",
            self.cols
        );
        let start = col * self.rows;
        &mut self.cells[start..start + self.rows]
    }
}

impl Index<Location> for Map {
    type Output = Cell;

    fn index(&self, at: Location) -> &Cell {
        &self[at.col][at.row]
    }
}

impl IndexMut<Location> for Map {
    fn index_mut(&mut self, at: Location) -> &mut Cell {
        &mut self[at.col][at.row]
    }
}
