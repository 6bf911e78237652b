//! Draws the visible part of the map through a view.

use crate::grid::{loc, Map};
use crate::image::{Canvas, Image};
use crate::tileset::TileSet;
use crate::types::{pt, Rect};
use crate::view::View;

/// Counters from one [`draw_view`] pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawStats {
    /// Grid cells inside the visible span.
    pub visited: usize,
    /// Cells that had a tile and were blitted.
    pub drawn: usize,
}

/// Composite every visible cell of `map` onto `canvas`.
///
/// Canvas pixel `(0, 0)` is the view's top-left corner. Each tile lands on a
/// cell-sized rectangle shifted up/left by the view's sub-cell remainder, so
/// partially scrolled cells are cut at the canvas edge instead of snapping to
/// whole cells. Empty cells, and cells past the map edge, leave the canvas
/// untouched. Tiles never overlap, so the visiting order does not matter.
///
/// Panics if the map holds an id the tile set does not contain.
pub fn draw_view<I, C>(view: &View, map: &Map, tiles: &TileSet<'_, I>, canvas: &mut C) -> DrawStats
where
    I: Image + ?Sized,
    C: Canvas + ?Sized,
{
    let geometry = view.geometry();
    let (cw, ch) = (geometry.width(), geometry.height());
    let (col_first, row_first) = (view.col_first(), view.row_first());
    let cols = view.col_last() - col_first;
    let rows = view.row_last() - row_first;

    let mut stats = DrawStats::default();
    for col in 0..cols {
        for row in 0..rows {
            stats.visited += 1;
            let Some(cell) = map.get(loc(col + col_first, row + row_first)) else {
                continue;
            };
            let id = cell.tile_id();
            if !id.is_valid() {
                continue;
            }
            let tile = tiles.tile(id);
            let x = col as i32 * cw - view.x();
            let y = row as i32 * ch - view.y();
            let dr = Rect::from_origin_size(pt(x, y), cw, ch);
            canvas.blit(dr, &tile, tile.bounds().min);
            stats.drawn += 1;
        }
    }
    stats
}
