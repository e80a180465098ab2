//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Tick-counted cadences only, no wall-clock time
//! - Shooter choice through an injected, seedable source
//! - Stable iteration order (formation list order)
//! - No rendering, audio, or input-device dependencies

pub mod collision;
pub mod debug;
pub mod grid;
pub mod state;
pub mod tick;

pub use collision::{LaserCollision, resolve_bombs, resolve_laser};
pub use debug::debug_render;
pub use grid::{Bounds, GridElement};
pub use state::{
    Alien, AlienTier, Bomb, BombBlast, Defender, GameState, Laser, LaserBlast, LaserHitKind,
    MoveDir, ShooterSelect, StepUpdates,
};
pub use tick::{Game, alien_step_delay, bomb_spawn_delay};
