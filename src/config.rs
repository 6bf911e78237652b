//! Viewer configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

use crate::types::{
    DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, DEFAULT_VIEW_COLS, DEFAULT_VIEW_ROWS, FRAME_MS,
    SCROLL_STEP_PX,
};

/// Sprite sheet the viewer opens when nothing else is configured.
pub const DEFAULT_SHEET: &str = "tileset.png";

/// Settings for the interactive viewer.
///
/// Command-line flags are applied on top of this by the binary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewerConfig {
    pub sheet: PathBuf,
    pub cell_width: i32,
    pub cell_height: i32,
    /// View size in cells.
    pub view_cols: i32,
    pub view_rows: i32,
    /// Pixels scrolled per tick per held key.
    pub scroll_step: i32,
    pub frame_ms: u64,
    pub log_dir: PathBuf,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            sheet: PathBuf::from(DEFAULT_SHEET),
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
            view_cols: DEFAULT_VIEW_COLS,
            view_rows: DEFAULT_VIEW_ROWS,
            scroll_step: SCROLL_STEP_PX,
            frame_ms: FRAME_MS,
            log_dir: default_log_dir(),
        }
    }
}

impl ViewerConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `TILEWORLD_SHEET` - sprite sheet path
    /// - `TILEWORLD_CELL_WIDTH` / `TILEWORLD_CELL_HEIGHT` - cell size in pixels
    /// - `TILEWORLD_VIEW_COLS` / `TILEWORLD_VIEW_ROWS` - view size in cells
    /// - `TILEWORLD_SCROLL_STEP` - pixels per tick
    /// - `TILEWORLD_FRAME_MS` - frame interval
    /// - `TILEWORLD_LOG_DIR` - log file directory
    ///
    /// Missing or unparseable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ViewerConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(sheet) = read("TILEWORLD_SHEET") {
            config.sheet = PathBuf::from(sheet);
        }
        if let Some(width) = parse_positive(read("TILEWORLD_CELL_WIDTH")) {
            config.cell_width = width;
        }
        if let Some(height) = parse_positive(read("TILEWORLD_CELL_HEIGHT")) {
            config.cell_height = height;
        }
        if let Some(cols) = parse_positive(read("TILEWORLD_VIEW_COLS")) {
            config.view_cols = cols;
        }
        if let Some(rows) = parse_positive(read("TILEWORLD_VIEW_ROWS")) {
            config.view_rows = rows;
        }
        if let Some(step) = parse_positive(read("TILEWORLD_SCROLL_STEP")) {
            config.scroll_step = step;
        }
        if let Some(ms) = read("TILEWORLD_FRAME_MS").and_then(|v| v.trim().parse::<u64>().ok()) {
            config.frame_ms = ms.max(1);
        }
        if let Some(dir) = read("TILEWORLD_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }

        config
    }

    /// View width in pixels.
    pub fn view_width(&self) -> i32 {
        self.view_cols.saturating_mul(self.cell_width)
    }

    /// View height in pixels.
    pub fn view_height(&self) -> i32 {
        self.view_rows.saturating_mul(self.cell_height)
    }
}

fn parse_positive(value: Option<String>) -> Option<i32> {
    value?.trim().parse::<i32>().ok().filter(|v| *v > 0)
}

/// Platform cache directory for log files, `/tmp/tileworld/logs` as fallback.
fn default_log_dir() -> PathBuf {
    let base = if cfg!(target_os = "macos") {
        env::var_os("HOME").map(|home| PathBuf::from(home).join("Library").join("Caches"))
    } else if cfg!(target_os = "windows") {
        env::var_os("LOCALAPPDATA").map(PathBuf::from)
    } else {
        env::var_os("XDG_CACHE_HOME")
            .map(PathBuf::from)
            .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".cache")))
    };
    base.map(|dir| dir.join("tileworld").join("logs"))
        .unwrap_or_else(|| PathBuf::from("/tmp/tileworld/logs"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = ViewerConfig::from_lookup(|_| None);
        assert_eq!(config.sheet, PathBuf::from(DEFAULT_SHEET));
        assert_eq!(config.cell_width, 32);
        assert_eq!(config.view_cols, 6);
        assert_eq!(config.scroll_step, 2);
        assert_eq!(config.frame_ms, 16);
        assert_eq!(config.view_width(), 192);
    }

    #[test]
    fn variables_override_defaults() {
        let config = ViewerConfig::from_lookup(lookup(&[
            ("TILEWORLD_SHEET", "tileset 2.png"),
            ("TILEWORLD_CELL_WIDTH", "48"),
            ("TILEWORLD_CELL_HEIGHT", "48"),
            ("TILEWORLD_VIEW_ROWS", "4"),
            ("TILEWORLD_FRAME_MS", "33"),
            ("TILEWORLD_LOG_DIR", "/var/log/tw"),
        ]));
        assert_eq!(config.sheet, PathBuf::from("tileset 2.png"));
        assert_eq!(config.cell_width, 48);
        assert_eq!(config.view_height(), 192);
        assert_eq!(config.frame_ms, 33);
        assert_eq!(config.log_dir, PathBuf::from("/var/log/tw"));
    }

    #[test]
    fn bad_values_fall_back() {
        let config = ViewerConfig::from_lookup(lookup(&[
            ("TILEWORLD_CELL_WIDTH", "wide"),
            ("TILEWORLD_VIEW_COLS", "0"),
            ("TILEWORLD_SCROLL_STEP", "-3"),
            ("TILEWORLD_FRAME_MS", "0"),
            ("TILEWORLD_SHEET", "  "),
        ]));
        assert_eq!(config.cell_width, 32);
        assert_eq!(config.view_cols, 6);
        assert_eq!(config.scroll_step, 2);
        assert_eq!(config.frame_ms, 1);
        assert_eq!(config.sheet, PathBuf::from(DEFAULT_SHEET));
    }
}
