//! TileSet tests - id to sheet rectangle mapping on real decoded sheets

use image::{Rgba, RgbaImage};

use tileworld::core::{CellGeometry, Error, Image, TileSet};
use tileworld::sheet::SpriteSheet;
use tileworld::types::{Rect, Rgb, TileId};

/// Sheet whose pixel at (x, y) encodes its own coordinates.
fn coord_sheet(width: u32, height: u32) -> SpriteSheet {
    SpriteSheet::from_image(RgbaImage::from_fn(width, height, |x, y| {
        Rgba([x as u8, y as u8, 7, 255])
    }))
}

#[test]
fn test_last_id_ignores_partial_tiles() {
    let sheet = coord_sheet(100, 100);
    let tiles = TileSet::new(&sheet, 32, 32).unwrap();
    assert_eq!(tiles.cols(), 3);
    assert_eq!(tiles.rows(), 3);
    assert_eq!(tiles.last_id(), TileId(9));
}

#[test]
fn test_tile_rects_are_row_major() {
    let sheet = coord_sheet(96, 64);
    let tiles = TileSet::new(&sheet, 32, 32).unwrap();

    assert_eq!(tiles.tile_rect(TileId(1)), Rect::new(0, 0, 32, 32));
    assert_eq!(tiles.tile_rect(TileId(3)), Rect::new(64, 0, 96, 32));
    assert_eq!(tiles.tile_rect(TileId(4)), Rect::new(0, 32, 32, 64));
    assert_eq!(tiles.tile_rect(TileId(6)), Rect::new(64, 32, 96, 64));
}

#[test]
fn test_every_tile_is_inside_the_sheet_and_disjoint() {
    let sheet = coord_sheet(160, 100);
    let tiles = TileSet::new(&sheet, 32, 48).unwrap();
    let bounds = sheet.bounds();

    let rects: Vec<Rect> = tiles.ids().map(|id| tiles.tile_rect(id)).collect();
    assert_eq!(rects.len(), tiles.last_id().get() as usize);
    for (i, a) in rects.iter().enumerate() {
        assert!(bounds.contains_rect(a), "{a} escapes {bounds}");
        for b in &rects[i + 1..] {
            assert!(!a.overlaps(b), "{a} overlaps {b}");
        }
    }
}

#[test]
fn test_tile_view_reads_sheet_pixels() {
    let sheet = coord_sheet(64, 64);
    let tiles = TileSet::new(&sheet, 32, 32).unwrap();

    let tile = tiles.tile(TileId(4));
    assert_eq!(tile.bounds(), Rect::new(32, 32, 64, 64));
    assert_eq!(tile.pixel(40, 33), Rgb::new(40, 33, 7));
}

#[test]
fn test_get_is_checked_and_cached() {
    let sheet = coord_sheet(64, 32);
    let tiles = TileSet::new(&sheet, 32, 32).unwrap();

    assert!(tiles.get(TileId::NONE).is_none());
    assert!(tiles.get(TileId(3)).is_none());
    assert_eq!(tiles.cached(), 0);

    let a = tiles.get(TileId(2)).unwrap();
    let b = tiles.get(TileId(2)).unwrap();
    assert_eq!(a.bounds(), b.bounds());
    assert_eq!(tiles.cached(), 1);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_tile_past_last_id_panics() {
    let sheet = coord_sheet(64, 64);
    let tiles = TileSet::new(&sheet, 32, 32).unwrap();
    let _ = tiles.tile(TileId(5));
}

#[test]
fn test_invalid_tile_size_is_rejected() {
    let sheet = coord_sheet(64, 64);
    assert!(matches!(
        TileSet::new(&sheet, 0, 32),
        Err(Error::InvalidDimensions { width: 0, height: 32 })
    ));
    assert!(TileSet::new(&sheet, 32, -1).is_err());
}

#[test]
fn test_sheet_smaller_than_one_tile_has_no_ids() {
    let sheet = coord_sheet(16, 64);
    let tiles = TileSet::with_geometry(&sheet, CellGeometry::default());
    assert_eq!(tiles.last_id(), TileId::NONE);
    assert_eq!(tiles.ids().count(), 0);
    assert!(!tiles.contains(TileId(1)));
}
