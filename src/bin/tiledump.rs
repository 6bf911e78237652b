//! Extract the tiles of one or more sprite sheets into PNG files.
//!
//! For `tileset.png` the tiles land in `tileset/tile_0001.png`, ... The
//! directory must not exist yet.
//!
//! ```text
//! tiledump -w 64 -h 64 tileset.png
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use tileworld::logging;
use tileworld::sheet::dump_sheet;
use tileworld::types::{DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH};

/// Extract tile images contained within tile sets
#[derive(Parser, Debug)]
#[command(name = "tiledump", version, disable_help_flag = true)]
#[command(after_help = "Examples:\n  tiledump -w 64 -h 64 tileset.png")]
struct Cli {
    /// Tile width
    #[arg(short = 'w', default_value_t = DEFAULT_CELL_WIDTH)]
    width: i32,

    /// Tile height
    #[arg(short = 'h', default_value_t = DEFAULT_CELL_HEIGHT)]
    height: i32,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Sprite sheet images
    #[arg(value_name = "IMG", required = true)]
    images: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_stderr()?;

    for image in &cli.images {
        let written = dump_sheet(image, cli.width, cli.height)
            .with_context(|| format!("dump {}", image.display()))?;
        println!("{}: {} tiles", image.display(), written.len());
    }
    Ok(())
}
