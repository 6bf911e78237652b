//! Shared value types and defaults for the tile world.
//!
//! Everything here is plain `Copy` data with no external dependencies, so it
//! can be used from the core math, the image adapters and the terminal front
//! end alike.
//!
//! # Coordinate spaces
//!
//! Two spaces are in play:
//!
//! - **Pixel space**: `i32` coordinates, origin at the top-left of the world,
//!   x grows to the right and y grows downwards. [`Point`] and [`Rect`] live
//!   here. Rectangles are half-open: `min` is inside, `max` is not.
//! - **Grid space**: `usize` column/row indices into the map. The conversion
//!   between the two is owned by `tileworld-core`.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_CELL_WIDTH` | 32 | Cell (and tile) width in pixels |
//! | `DEFAULT_CELL_HEIGHT` | 32 | Cell (and tile) height in pixels |
//! | `DEFAULT_VIEW_COLS` | 6 | Columns visible in the viewer |
//! | `DEFAULT_VIEW_ROWS` | 6 | Rows visible in the viewer |
//! | `SCROLL_STEP_PX` | 2 | Pixels scrolled per tick per held key |
//! | `FRAME_MS` | 16 | Frame interval (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use tileworld_types::{pt, Rect, TileId};
//!
//! let r = Rect::new(0, 0, 32, 32);
//! assert_eq!(r.width(), 32);
//! assert!(r.contains(pt(31, 0)));
//! assert!(!r.contains(pt(32, 0)));
//!
//! assert!(!TileId::NONE.is_valid());
//! assert!(TileId(1).is_valid());
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Default cell width in pixels.
pub const DEFAULT_CELL_WIDTH: i32 = 32;

/// Default cell height in pixels.
pub const DEFAULT_CELL_HEIGHT: i32 = 32;

/// Default number of columns visible through the viewer.
pub const DEFAULT_VIEW_COLS: i32 = 6;

/// Default number of rows visible through the viewer.
pub const DEFAULT_VIEW_ROWS: i32 = 6;

/// Pixels scrolled per tick for each held direction key.
pub const SCROLL_STEP_PX: i32 = 2;

/// Frame interval in milliseconds (16ms ≈ 60 FPS).
pub const FRAME_MS: u64 = 16;

/// A point (or vector) in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise saturating addition.
    pub fn saturating_add(self, other: Point) -> Point {
        Point {
            x: self.x.saturating_add(other.x),
            y: self.y.saturating_add(other.y),
        }
    }
}

/// Shorthand for [`Point::new`].
pub const fn pt(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        *self = *self + rhs;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        *self = *self - rhs;
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Half-open rectangle `[min.x, max.x) x [min.y, max.y)` in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// Build a rectangle from two corners. The corners are swapped as needed
    /// so that `min <= max` on both axes.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (x0, x1) = if x0 > x1 { (x1, x0) } else { (x0, x1) };
        let (y0, y1) = if y0 > y1 { (y1, y0) } else { (y0, y1) };
        Self {
            min: pt(x0, y0),
            max: pt(x1, y1),
        }
    }

    /// Rectangle with top-left `origin` and the given size.
    pub fn from_origin_size(origin: Point, width: i32, height: i32) -> Self {
        Self::new(origin.x, origin.y, origin.x + width, origin.y + height)
    }

    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// Width and height as a point.
    pub fn size(&self) -> Point {
        self.max - self.min
    }

    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    pub fn contains(&self, p: Point) -> bool {
        self.min.x <= p.x && p.x < self.max.x && self.min.y <= p.y && p.y < self.max.y
    }

    /// Whether `other` lies entirely within `self`. Empty rectangles are
    /// contained in everything.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        if other.is_empty() {
            return true;
        }
        self.min.x <= other.min.x
            && other.max.x <= self.max.x
            && self.min.y <= other.min.y
            && other.max.y <= self.max.y
    }

    /// The largest rectangle contained in both. Returns the zero rectangle if
    /// they do not overlap.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let r = Rect {
            min: pt(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: pt(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        };
        if r.is_empty() {
            Rect::default()
        } else {
            r
        }
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        !self.intersect(other).is_empty()
    }

    /// The rectangle moved by `delta`.
    pub fn translate(&self, delta: Point) -> Rect {
        Rect {
            min: self.min + delta,
            max: self.max + delta,
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const LIME: Rgb = Rgb::new(0x00, 0xFF, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Identifies one tile image within a specific sprite sheet.
///
/// Ids are 1-based and count row-major through the sheet. The zero value
/// ([`TileId::NONE`]) means "no tile".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TileId(pub u32);

impl TileId {
    pub const NONE: TileId = TileId(0);

    /// `false` only for the zero value.
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for TileId {
    fn from(v: u32) -> Self {
        TileId(v)
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scroll direction of the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Pixel delta for one step of `step` pixels in this direction.
    ///
    /// ```
    /// use tileworld_types::{pt, Direction};
    ///
    /// assert_eq!(Direction::Up.delta(2), pt(0, -2));
    /// assert_eq!(Direction::Right.delta(2), pt(2, 0));
    /// ```
    pub fn delta(self, step: i32) -> Point {
        match self {
            Direction::Up => pt(0, -step),
            Direction::Down => pt(0, step),
            Direction::Left => pt(-step, 0),
            Direction::Right => pt(step, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
