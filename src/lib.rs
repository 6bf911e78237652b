//! Tile world (workspace facade crate).
//!
//! Re-exports the member crates under one name and adds the pieces the
//! binaries share: environment configuration, the demo island and logging
//! setup.

pub mod config;
pub mod demo;
pub mod logging;

pub use tileworld_core as core;
pub use tileworld_input as input;
pub use tileworld_sheet as sheet;
pub use tileworld_term as term;
pub use tileworld_types as types;
