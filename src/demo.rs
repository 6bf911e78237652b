//! The demo level: a small island in the sea.
//!
//! The level is described in terrain, not tile ids, because the two bundled
//! sheets order their tiles differently. A [`Palette`] maps terrain to ids.

use crate::core::{Cell, Map};
use crate::types::TileId;

/// Island width in cells.
pub const ISLAND_COLS: usize = 9;
/// Island height in cells.
pub const ISLAND_ROWS: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terrain {
    Water,
    Sand,
    Grass,
    /// Also drawn as dirt by some sheets.
    Gravel,
}

/// Tile id for each terrain in one particular sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub water: TileId,
    pub sand: TileId,
    pub grass: TileId,
    pub gravel: TileId,
}

impl Palette {
    /// Layout of the 48x48 globe sheet.
    pub const GLOBE: Palette = Palette {
        grass: TileId(1),
        sand: TileId(2),
        water: TileId(3),
        gravel: TileId(4),
    };

    /// Layout of the 32x32 world sheet.
    pub const WORLD: Palette = Palette {
        water: TileId(1),
        gravel: TileId(2),
        grass: TileId(3),
        sand: TileId(4),
    };

    pub fn id(&self, terrain: Terrain) -> TileId {
        match terrain {
            Terrain::Water => self.water,
            Terrain::Sand => self.sand,
            Terrain::Grass => self.grass,
            Terrain::Gravel => self.gravel,
        }
    }

    pub fn cell(&self, terrain: Terrain) -> Cell {
        Cell(self.id(terrain))
    }

    /// Highest id the palette uses; the sheet must hold at least this many tiles.
    pub fn max_id(&self) -> TileId {
        [self.water, self.sand, self.grass, self.gravel]
            .into_iter()
            .max()
            .unwrap_or(TileId::NONE)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::GLOBE
    }
}

use Terrain::{Grass as R, Gravel as G, Sand as S, Water as W};

/// Island columns, west to east; each column lists rows north to south.
const ISLAND: [[Terrain; ISLAND_ROWS]; ISLAND_COLS] = [
    [W, W, W, W, W, W, W, W, W, W, W],
    [W, W, W, W, W, W, W, W, W, W, W],
    [W, W, S, S, S, S, S, W, W, W, W],
    [S, S, G, G, G, G, S, S, S, W, W],
    [S, G, G, G, G, G, G, G, S, S, W],
    [G, G, G, R, R, R, G, G, G, S, W],
    [G, G, G, R, R, R, G, G, G, S, W],
    [G, G, G, R, R, R, G, G, G, S, W],
    [W, S, W, R, W, S, W, R, W, S, W],
];

/// Terrain at a cell of the island, `None` outside it.
pub fn terrain_at(col: usize, row: usize) -> Option<Terrain> {
    ISLAND.get(col)?.get(row).copied()
}

/// Build the island map with the ids of `palette`.
pub fn island(palette: &Palette) -> Map {
    Map::from_fn(ISLAND_COLS, ISLAND_ROWS, |at| {
        palette.cell(ISLAND[at.col][at.row])
    })
}
