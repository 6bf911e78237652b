use crate::types::Point;

/// Decides when the viewer loop actually repaints.
///
/// A moved camera repaints immediately. A still camera repaints at most once
/// per `min_interval_ms`, which keeps the picture fresh after terminal damage
/// without burning CPU.
#[derive(Debug, Clone)]
pub struct RedrawGate {
    min_interval_ms: u64,
    last_ms: u64,
    last_offset: Option<Point>,
}

impl RedrawGate {
    pub fn new(min_interval_ms: u64) -> Self {
        Self {
            min_interval_ms,
            last_ms: 0,
            last_offset: None,
        }
    }

    pub fn should_redraw(&mut self, now_ms: u64, offset: Point) -> bool {
        let moved = self.last_offset != Some(offset);
        if moved || now_ms.saturating_sub(self.last_ms) >= self.min_interval_ms {
            self.last_ms = now_ms;
            self.last_offset = Some(offset);
            return true;
        }
        false
    }

    /// Force the next call to redraw.
    pub fn invalidate(&mut self) {
        self.last_offset = None;
    }
}
