//! Held-key scroll input for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! a direction stays held only while presses (or OS key repeats) keep arriving.

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::direction_for_key;
use crate::types::{Direction, Point, SCROLL_STEP_PX};

// Long enough to bridge the gap between OS key repeats, short enough that a
// single tap does not keep scrolling.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Held {
    dir: Direction,
    last_ms: u64,
}

/// Tracks held scroll directions and turns them into per-tick deltas.
#[derive(Debug, Clone)]
pub struct ScrollInput {
    held: ArrayVec<Held, 4>,
    step: i32,
    key_release_timeout_ms: u64,
}

impl ScrollInput {
    pub fn new() -> Self {
        Self::with_step(SCROLL_STEP_PX)
    }

    /// Scroll `step` pixels per tick for each held direction.
    pub fn with_step(step: i32) -> Self {
        Self {
            held: ArrayVec::new(),
            step,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    pub fn key_release_timeout_ms(&self) -> u64 {
        self.key_release_timeout_ms
    }

    /// Mark `dir` as held. Repeats of a held key refresh its timestamp.
    pub fn press(&mut self, dir: Direction, now_ms: u64) {
        if let Some(h) = self.held.iter_mut().find(|h| h.dir == dir) {
            h.last_ms = now_ms;
        } else {
            // At most one entry per direction, so there is always room.
            self.held.push(Held { dir, last_ms: now_ms });
        }
    }

    pub fn release(&mut self, dir: Direction) {
        self.held.retain(|h| h.dir != dir);
    }

    /// Feed a key event. Returns `true` if the key is a scroll key.
    pub fn handle_key_event(&mut self, key: KeyEvent, now_ms: u64) -> bool {
        let Some(dir) = direction_for_key(key.code) else {
            return false;
        };
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.press(dir, now_ms),
            KeyEventKind::Release => self.release(dir),
        }
        true
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        self.held.iter().any(|h| h.dir == dir)
    }

    /// Combined delta for one tick at `now_ms`.
    ///
    /// Diagonals add up into a single move; opposite directions cancel out.
    /// Directions not refreshed within the release timeout are dropped first.
    pub fn tick(&mut self, now_ms: u64) -> Point {
        let timeout = self.key_release_timeout_ms;
        self.held
            .retain(|h| now_ms.saturating_sub(h.last_ms) <= timeout);
        self.held
            .iter()
            .fold(Point::ZERO, |acc, h| acc + h.dir.delta(self.step))
    }

    pub fn reset(&mut self) {
        self.held.clear();
    }
}

impl Default for ScrollInput {
    fn default() -> Self {
        Self::new()
    }
}
