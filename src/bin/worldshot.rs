//! Render a fixed camera over the demo island into a PNG.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use tileworld::core::{draw_view, CellGeometry, TileSet, View};
use tileworld::demo::{self, Palette};
use tileworld::logging;
use tileworld::sheet::{ImageCanvas, SpriteSheet};
use tileworld::types::{pt, Rgb, DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH};

/// Render the demo world through a fixed camera
#[derive(Parser, Debug)]
#[command(name = "worldshot", version, long_about = None)]
struct Cli {
    /// Sprite sheet image (water, dirt, grass, sand)
    #[arg(long, default_value = "tileset 1.png")]
    sheet: PathBuf,

    /// Output image
    #[arg(short, long, default_value = "world.png")]
    output: PathBuf,

    /// Visible columns
    #[arg(long, default_value_t = 7)]
    cols: i32,

    /// Visible rows
    #[arg(long, default_value_t = 7)]
    rows: i32,

    /// Camera x offset in pixels
    #[arg(short = 'x', long, default_value_t = 48)]
    x: i32,

    /// Camera y offset in pixels
    #[arg(short = 'y', long, default_value_t = 48)]
    y: i32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_stderr()?;

    if cli.cols <= 0 || cli.rows <= 0 {
        bail!("camera must be at least 1x1 cells, got {}x{}", cli.cols, cli.rows);
    }

    let geometry = CellGeometry::new(DEFAULT_CELL_WIDTH, DEFAULT_CELL_HEIGHT)?;
    let sheet = SpriteSheet::open(&cli.sheet)?;
    let tiles = TileSet::with_geometry(&sheet, geometry);
    let palette = Palette::WORLD;
    if !tiles.contains(palette.max_id()) {
        bail!(
            "{} holds {} tiles, the island needs {}",
            cli.sheet.display(),
            tiles.last_id(),
            palette.max_id()
        );
    }

    let map = demo::island(&palette);
    let (width, height) = (cli.cols * geometry.width(), cli.rows * geometry.height());
    let mut view = View::new(width, height, map.pixel_end(geometry), geometry);
    view.scroll_to(pt(cli.x, cli.y));
    if view.offset() != pt(cli.x, cli.y) {
        tracing::warn!(requested = %pt(cli.x, cli.y), actual = %view.offset(), "camera clamped");
    }

    let mut canvas = ImageCanvas::new(width as u32, height as u32, Rgb::LIME);
    let stats = draw_view(&view, &map, &tiles, &mut canvas);
    canvas.save(&cli.output)?;

    tracing::info!(
        output = %cli.output.display(),
        camera = ?view.camera(),
        drawn = stats.drawn,
        "wrote world"
    );
    Ok(())
}
