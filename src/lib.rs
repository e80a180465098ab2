//! Space Creatures - a fixed-formation alien shooting arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (formation, laser, bombs, scoring)
//! - `settings`: Headless run configuration
//! - `driver`: Headless game loop with an autopilot input source

pub mod driver;
pub mod settings;
pub mod sim;

pub use driver::{Autopilot, RunOutcome, RunSummary};
pub use settings::RunSettings;
pub use sim::{Game, GameState, StepUpdates};

/// Game configuration constants (grid units, not pixels)
pub mod consts {
    /// Playfield columns and rows
    pub const NUM_COLS: u32 = 13;
    pub const NUM_ROWS: u32 = 10;

    /// Size of one column/row on the underlying grid
    pub const COL_WIDTH: f32 = 8.0;
    pub const ROW_HEIGHT: f32 = 2.0;

    pub const GRID_WIDTH: f32 = COL_WIDTH * NUM_COLS as f32;
    pub const GRID_HEIGHT: f32 = ROW_HEIGHT * NUM_ROWS as f32;

    /// Formation dimensions
    pub const NUM_ALIEN_COLS: u32 = 11;
    pub const NUM_ALIEN_ROWS: u32 = 5;
    pub const MAX_ALIENS: usize = (NUM_ALIEN_COLS * NUM_ALIEN_ROWS) as usize;

    /// Alien hit box: widest box, narrowed per tier
    pub const ALIEN_BOX_WIDTH: f32 = 5.5;
    pub const ALIEN_BOX_HEIGHT: f32 = 1.1;

    /// Game ticks between laser moves
    pub const LASER_STEP_DELAY: u64 = 3;
    /// Game ticks between bomb moves
    pub const BOMB_STEP_DELAY: u64 = 5;
    /// Bombs are never dropped more often than this
    pub const MIN_BOMB_SPAWN_DELAY: u64 = 20;

    /// Projectile travel per move (negative = up)
    pub const LASER_DY: f32 = -1.0;
    pub const BOMB_DY: f32 = 1.0;
}
