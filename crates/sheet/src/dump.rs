//! Extracting every tile of a sheet into its own PNG file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SheetError};
use crate::sheet::SpriteSheet;
use crate::types::TileId;
use tileworld_core::{Image, TileSet};

/// Directory the tiles of `sheet_path` are written to: the sheet path with
/// its extension removed (`art/tiles.png` -> `art/tiles`).
pub fn tile_dir(sheet_path: &Path) -> PathBuf {
    sheet_path.with_extension("")
}

/// File name of one dumped tile, e.g. `tile_0007.png`.
pub fn tile_file_name(id: TileId) -> String {
    format!("tile_{:04}.png", id.get())
}

/// Write tiles `1..=last_id()` of `tiles` into the new directory `dir`.
///
/// `dir` must not exist yet. Returns the paths written, in id order.
pub fn dump_tiles(tiles: &TileSet<'_, SpriteSheet>, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir(dir).map_err(|source| SheetError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(tiles.last_id().get() as usize);
    for id in tiles.ids() {
        let tile = tiles.tile(id);
        let path = dir.join(tile_file_name(id));
        tile.parent()
            .crop(tile.bounds())
            .save(&path)
            .map_err(|source| SheetError::Save {
                path: path.clone(),
                source,
            })?;
        tracing::debug!(%id, path = %path.display(), "dumped tile");
        written.push(path);
    }
    Ok(written)
}

/// Open the sheet at `sheet_path` and dump its tiles next to it.
pub fn dump_sheet(sheet_path: &Path, tile_width: i32, tile_height: i32) -> Result<Vec<PathBuf>> {
    let sheet = SpriteSheet::open(sheet_path)?;
    let tiles = TileSet::new(&sheet, tile_width, tile_height)?;
    let dir = tile_dir(sheet_path);
    let written = dump_tiles(&tiles, &dir)?;
    tracing::info!(
        sheet = %sheet_path.display(),
        dir = %dir.display(),
        tiles = written.len(),
        "dumped tile set"
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn tile_dir_strips_extension() {
        assert_eq!(tile_dir(Path::new("art/tileset 1.png")), PathBuf::from("art/tileset 1"));
        assert_eq!(tile_dir(Path::new("sheet")), PathBuf::from("sheet"));
    }

    #[test]
    fn tile_names_are_zero_padded() {
        assert_eq!(tile_file_name(TileId(7)), "tile_0007.png");
        assert_eq!(tile_file_name(TileId(12345)), "tile_12345.png");
    }

    #[test]
    fn dumps_every_whole_tile() {
        let tmp = tempfile::tempdir().unwrap();
        // 3x2 whole tiles of 4x4 plus a 2px remainder on each axis.
        let sheet = SpriteSheet::from_image(RgbaImage::from_fn(14, 10, |x, y| {
            Rgba([(x / 4) as u8, (y / 4) as u8, 0, 255])
        }));
        let tiles = TileSet::new(&sheet, 4, 4).unwrap();
        let dir = tmp.path().join("tiles");

        let written = dump_tiles(&tiles, &dir).unwrap();
        assert_eq!(written.len(), 6);
        assert_eq!(written[5], dir.join("tile_0006.png"));

        let last = image::open(&written[5]).unwrap().to_rgba8();
        assert_eq!(last.dimensions(), (4, 4));
        assert_eq!(*last.get_pixel(0, 0), Rgba([2, 1, 0, 255]));
    }

    #[test]
    fn existing_directory_aborts_the_dump() {
        let tmp = tempfile::tempdir().unwrap();
        let sheet = SpriteSheet::from_image(RgbaImage::new(4, 4));
        let tiles = TileSet::new(&sheet, 4, 4).unwrap();

        let err = dump_tiles(&tiles, tmp.path()).unwrap_err();
        assert!(matches!(err, SheetError::CreateDir { .. }));
    }

    #[test]
    fn dump_sheet_rejects_bad_tile_size() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("sheet.png");
        RgbaImage::new(8, 8).save(&path).unwrap();

        let err = dump_sheet(&path, 0, 8).unwrap_err();
        assert!(matches!(err, SheetError::Core(tileworld_core::Error::InvalidDimensions { .. })));
        assert!(!tmp.path().join("sheet").exists());
    }
}
