//! Input tests - keys to scroll deltas as the viewer loop sees them

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use tileworld::core::{CellGeometry, View};
use tileworld::input::{direction_for_key, should_quit, ScrollInput};
use tileworld::types::{pt, Direction, Point};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn release(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    }
}

#[test]
fn test_key_bindings() {
    assert_eq!(direction_for_key(KeyCode::Up), Some(Direction::Up));
    assert_eq!(direction_for_key(KeyCode::Char('h')), Some(Direction::Left));
    assert_eq!(direction_for_key(KeyCode::Char('s')), Some(Direction::Down));
    assert!(should_quit(press(KeyCode::Char('Q'))));
    assert!(!should_quit(press(KeyCode::Up)));
}

#[test]
fn test_held_keys_scroll_the_view() {
    let cells = CellGeometry::default();
    let mut view = View::new(192, 192, pt(288, 352), cells);
    let mut input = ScrollInput::new();

    input.handle_key_event(press(KeyCode::Right), 0);
    input.handle_key_event(press(KeyCode::Down), 0);
    for t in 1..=5 {
        view.move_by(input.tick(t * 16));
        // Key repeat keeps both directions alive.
        input.handle_key_event(press(KeyCode::Right), t * 16);
        input.handle_key_event(press(KeyCode::Down), t * 16);
    }
    assert_eq!(view.offset(), pt(10, 10));

    input.handle_key_event(release(KeyCode::Down), 96);
    view.move_by(input.tick(112));
    assert_eq!(view.offset(), pt(12, 10));
}

#[test]
fn test_scrolling_stops_at_the_world_edge() {
    let cells = CellGeometry::default();
    let mut view = View::new(192, 192, pt(288, 352), cells);
    let mut input = ScrollInput::with_step(50).with_key_release_timeout_ms(u64::MAX);

    input.press(Direction::Right, 0);
    for t in 0..10 {
        view.move_by(input.tick(t));
    }
    assert_eq!(view.offset(), pt(96, 0));

    input.reset();
    assert_eq!(input.tick(11), Point::ZERO);
}
