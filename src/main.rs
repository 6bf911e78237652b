//! Terminal tile-world viewer (default binary).
//!
//! Loads a sprite sheet, builds the demo island and lets you scroll a
//! fixed-size camera over it with the arrow keys (or hjkl / wasd). The world
//! is composited in software and shown with half-block glyphs.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::event::{self, Event, KeyEventKind};

use tileworld::config::ViewerConfig;
use tileworld::core::{draw_view, CellGeometry, TileSet, View};
use tileworld::demo::{self, Palette};
use tileworld::input::{should_quit, ScrollInput};
use tileworld::logging;
use tileworld::sheet::SpriteSheet;
use tileworld::term::{FrameBuffer, PixelBuffer, RedrawGate, TerminalRenderer, Viewport, WorldView};
use tileworld::types::{Point, Rgb};

/// How often an idle screen is repainted anyway.
const IDLE_REDRAW_MS: u64 = 500;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PaletteArg {
    /// Grass, sand, water, gravel (48x48 sheet)
    Globe,
    /// Water, dirt, grass, sand (32x32 sheet)
    World,
}

impl From<PaletteArg> for Palette {
    fn from(arg: PaletteArg) -> Self {
        match arg {
            PaletteArg::Globe => Palette::GLOBE,
            PaletteArg::World => Palette::WORLD,
        }
    }
}

/// Scroll a camera over a tile world in the terminal
#[derive(Parser, Debug)]
#[command(name = "tileworld", version, long_about = None)]
struct Cli {
    /// Sprite sheet image [env: TILEWORLD_SHEET]
    #[arg(long)]
    sheet: Option<PathBuf>,

    /// Cell and tile width in pixels [env: TILEWORLD_CELL_WIDTH]
    #[arg(long)]
    cell_width: Option<i32>,

    /// Cell and tile height in pixels [env: TILEWORLD_CELL_HEIGHT]
    #[arg(long)]
    cell_height: Option<i32>,

    /// Visible columns [env: TILEWORLD_VIEW_COLS]
    #[arg(long)]
    cols: Option<i32>,

    /// Visible rows [env: TILEWORLD_VIEW_ROWS]
    #[arg(long)]
    rows: Option<i32>,

    /// Pixels scrolled per frame per held key [env: TILEWORLD_SCROLL_STEP]
    #[arg(long)]
    step: Option<i32>,

    /// Frame interval in milliseconds [env: TILEWORLD_FRAME_MS]
    #[arg(long)]
    frame_ms: Option<u64>,

    /// Which sheet layout the tile ids follow
    #[arg(long, value_enum, default_value = "globe")]
    palette: PaletteArg,

    /// Log file directory [env: TILEWORLD_LOG_DIR]
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

impl Cli {
    fn apply(self, mut config: ViewerConfig) -> ViewerConfig {
        if let Some(sheet) = self.sheet {
            config.sheet = sheet;
        }
        if let Some(w) = self.cell_width {
            config.cell_width = w;
        }
        if let Some(h) = self.cell_height {
            config.cell_height = h;
        }
        if let Some(cols) = self.cols {
            config.view_cols = cols;
        }
        if let Some(rows) = self.rows {
            config.view_rows = rows;
        }
        if let Some(step) = self.step {
            config.scroll_step = step;
        }
        if let Some(ms) = self.frame_ms {
            config.frame_ms = ms.max(1);
        }
        if let Some(dir) = self.log_dir {
            config.log_dir = dir;
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let palette = Palette::from(cli.palette);
    let config = cli.apply(ViewerConfig::from_env());

    let (_guard, log_file) = logging::init_file(&config.log_dir)?;
    tracing::info!(log = %log_file.display(), ?config, "viewer starting");

    let geometry = CellGeometry::new(config.cell_width, config.cell_height)?;
    let sheet = SpriteSheet::open(&config.sheet)?;
    let tiles = TileSet::with_geometry(&sheet, geometry);
    if !tiles.contains(palette.max_id()) {
        bail!(
            "{} holds {} tiles of {}x{}, the island needs {}",
            config.sheet.display(),
            tiles.last_id(),
            geometry.width(),
            geometry.height(),
            palette.max_id()
        );
    }

    if config.view_cols <= 0 || config.view_rows <= 0 {
        bail!("view must be at least 1x1 cells, got {}x{}", config.view_cols, config.view_rows);
    }

    let map = demo::island(&palette);
    let view = View::new(
        config.view_width(),
        config.view_height(),
        map.pixel_end(geometry),
        geometry,
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, view, &map, &tiles);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        tracing::error!("viewer failed: {e:#}");
    }
    result
}

fn run(
    term: &mut TerminalRenderer,
    config: &ViewerConfig,
    mut view: View,
    map: &tileworld::core::Map,
    tiles: &TileSet<'_, SpriteSheet>,
) -> Result<()> {
    let world_view = WorldView::new();
    let mut pixels = PixelBuffer::new(view.width(), view.height());
    let mut fb = FrameBuffer::new(0, 0);
    let mut gate = RedrawGate::new(IDLE_REDRAW_MS);
    let mut input = ScrollInput::with_step(config.scroll_step);

    let start = Instant::now();
    let now_ms = || start.elapsed().as_millis() as u64;
    let frame = Duration::from_millis(config.frame_ms);
    let mut last_tick = Instant::now();
    let mut viewport = None;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        if viewport != Some(Viewport::new(w, h)) {
            viewport = Some(Viewport::new(w, h));
            term.invalidate();
            gate.invalidate();
            tracing::debug!(w, h, "viewport changed");
        }

        if gate.should_redraw(now_ms(), view.offset()) {
            pixels.clear(Rgb::BLACK);
            let stats = draw_view(&view, map, tiles, &mut pixels);
            tracing::trace!(visited = stats.visited, drawn = stats.drawn, "frame");
            world_view.render_into(&pixels, &view, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb).context("draw frame")?;
        }

        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        tracing::info!(offset = %view.offset(), "quit");
                        return Ok(());
                    }
                    input.handle_key_event(key, now_ms());
                }
                Event::Resize(..) => {
                    term.invalidate();
                    gate.invalidate();
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= frame {
            last_tick = Instant::now();
            let delta = input.tick(now_ms());
            if delta != Point::ZERO {
                view.move_by(delta);
            }
        }
    }
}
