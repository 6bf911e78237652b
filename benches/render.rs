use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};

use tileworld::core::{draw_view, CellGeometry, TileSet, View};
use tileworld::demo::{self, Palette};
use tileworld::sheet::SpriteSheet;
use tileworld::term::{FrameBuffer, PixelBuffer, Viewport, WorldView};
use tileworld::types::{pt, TileId};

fn sheet() -> SpriteSheet {
    SpriteSheet::from_image(RgbaImage::from_fn(256, 256, |x, y| {
        Rgba([x as u8, y as u8, (x ^ y) as u8, 255])
    }))
}

fn bench_tile_lookup(c: &mut Criterion) {
    let sheet = sheet();
    let tiles = TileSet::with_geometry(&sheet, CellGeometry::default());

    c.bench_function("tile_lookup_cached", |b| {
        b.iter(|| {
            for id in 1..=64 {
                black_box(tiles.tile(TileId(black_box(id))));
            }
        })
    });

    c.bench_function("tile_rect", |b| {
        b.iter(|| black_box(tiles.tile_rect(TileId(black_box(37)))))
    });
}

fn bench_view_move(c: &mut Criterion) {
    let cells = CellGeometry::default();
    let mut view = View::new(192, 192, pt(288, 352), cells);
    let mut dir = 1;

    c.bench_function("view_move_by", |b| {
        b.iter(|| {
            view.move_by(black_box(pt(2 * dir, 2 * dir)));
            if view.offset() == view.max() || view.offset() == pt(0, 0) {
                dir = -dir;
            }
        })
    });
}

fn bench_full_frame(c: &mut Criterion) {
    let sheet = sheet();
    let cells = CellGeometry::default();
    let tiles = TileSet::with_geometry(&sheet, cells);
    let map = demo::island(&Palette::GLOBE);
    let mut view = View::new(192, 192, map.pixel_end(cells), cells);
    view.scroll_to(pt(17, 33));
    let mut pixels = PixelBuffer::new(192, 192);

    c.bench_function("draw_view_6x6_partial", |b| {
        b.iter(|| black_box(draw_view(&view, &map, &tiles, &mut pixels)))
    });

    let world_view = WorldView::new();
    let mut fb = FrameBuffer::new(0, 0);
    c.bench_function("world_view_render_80x24", |b| {
        b.iter(|| world_view.render_into(&pixels, &view, Viewport::new(80, 24), &mut fb))
    });
}

criterion_group!(benches, bench_tile_lookup, bench_view_move, bench_full_frame);
criterion_main!(benches);
