//! Game state and core simulation types
//!
//! Everything a renderer or sound layer reads lives here.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::GridElement;
use crate::consts::*;

/// Alien creature tier, fixed by the alien's row within the formation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlienTier {
    /// Top row, narrowest box
    Top,
    /// Rows 1-2
    Middle,
    /// Rows 3 and below, widest box
    Bottom,
}

impl AlienTier {
    pub fn from_row(alien_row: u32) -> Self {
        match alien_row {
            0 => AlienTier::Top,
            1 | 2 => AlienTier::Middle,
            _ => AlienTier::Bottom,
        }
    }

    /// Points awarded for destroying this tier
    pub fn score(&self) -> u64 {
        match self {
            AlienTier::Top => 30,
            AlienTier::Middle => 20,
            AlienTier::Bottom => 10,
        }
    }

    /// How much narrower than `ALIEN_BOX_WIDTH` the hit box is
    pub fn narrow_by(&self) -> f32 {
        match self {
            AlienTier::Top => 1.0,
            AlienTier::Middle => 0.5,
            AlienTier::Bottom => 0.0,
        }
    }

    pub fn box_width(&self) -> f32 {
        ALIEN_BOX_WIDTH - self.narrow_by()
    }
}

/// One member of the formation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Alien {
    /// Row within the formation (0 = top)
    pub alien_row: u32,
    pub tier: AlienTier,
    pub body: GridElement,
    /// Animation frame toggle, flipped on every formation step
    pub expression: bool,
    /// Hit by the laser; pruned on the next formation step
    pub dead: bool,
}

impl Alien {
    pub fn new(alien_row: u32, grid_x: f32, grid_y: f32) -> Self {
        let tier = AlienTier::from_row(alien_row);
        let box_width = tier.box_width();
        assert!(
            box_width > 0.0 && box_width <= COL_WIDTH,
            "alien hit box must fit its column"
        );
        Self {
            alien_row,
            tier,
            body: GridElement::new(
                Vec2::new(grid_x, grid_y),
                Vec2::new((COL_WIDTH - box_width) / 2.0, 0.0),
                Vec2::new(box_width, ALIEN_BOX_HEIGHT),
            ),
            expression: false,
            dead: false,
        }
    }

    /// Move one formation step and flip the animation frame
    pub fn update(&mut self, dx: f32, dy: f32) {
        self.body.translate(dx, dy);
        self.expression = !self.expression;
    }
}

/// The player's ship at the bottom of the playfield
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Defender {
    pub body: GridElement,
}

impl Default for Defender {
    fn default() -> Self {
        Self::new((NUM_COLS / 2) as f32 * COL_WIDTH)
    }
}

impl Defender {
    pub fn new(grid_x: f32) -> Self {
        let box_width = COL_WIDTH;
        Self {
            body: GridElement::new(
                Vec2::new(grid_x, GRID_HEIGHT),
                Vec2::new((COL_WIDTH - box_width) / 2.0, 0.0),
                Vec2::new(box_width, ROW_HEIGHT / 2.0),
            ),
        }
    }

    /// Shift horizontally, clamped to the playfield
    pub fn update(&mut self, dx: f32) {
        self.body.pos.x = (self.body.pos.x + dx).clamp(0.0, GRID_WIDTH - COL_WIDTH);
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.body.contains(x, y)
    }
}

/// The single player projectile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Laser {
    pub body: GridElement,
}

impl Laser {
    pub fn new(grid_x: f32, grid_y: f32) -> Self {
        Self {
            body: GridElement::new(
                Vec2::new(grid_x, grid_y),
                Vec2::ZERO,
                Vec2::new(0.0, ROW_HEIGHT / 2.0),
            ),
        }
    }

    /// Spawn centered on the defender, directly above it
    pub fn fired_from(defender: &Defender) -> Self {
        Self::new(
            defender.body.center().x,
            defender.body.grid_y() - ROW_HEIGHT / 2.0,
        )
    }
}

/// A falling enemy projectile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bomb {
    pub body: GridElement,
    /// `grid_y` of the alien that dropped it (renderer color lookup only)
    pub parent_y: f32,
}

impl Bomb {
    pub fn new(grid_x: f32, grid_y: f32, parent_y: f32) -> Self {
        Self {
            body: GridElement::new(
                Vec2::new(grid_x, grid_y),
                Vec2::ZERO,
                Vec2::new(0.0, ROW_HEIGHT / 4.0),
            ),
            parent_y,
        }
    }

    /// Spawn centered under the alien's hit box
    pub fn dropped_by(alien: &Alien) -> Self {
        let bounds = alien.body.bounds();
        Self::new(
            alien.body.center().x,
            bounds.y + bounds.height,
            alien.body.grid_y(),
        )
    }
}

/// Player horizontal input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MoveDir {
    Left,
    #[default]
    Idle,
    Right,
}

impl MoveDir {
    pub fn delta(&self) -> f32 {
        match self {
            MoveDir::Left => -1.0,
            MoveDir::Idle => 0.0,
            MoveDir::Right => 1.0,
        }
    }
}

/// Source of the random shooter choice for bomb drops
///
/// Any `rand::Rng` works; tests can pin the choice with a fixed index.
pub trait ShooterSelect {
    /// Pick an index in `0..candidates` (`candidates` is never zero)
    fn pick(&mut self, candidates: usize) -> usize;
}

impl<R: Rng> ShooterSelect for R {
    fn pick(&mut self, candidates: usize) -> usize {
        self.random_range(0..candidates)
    }
}

/// What a laser collision check produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaserHitKind {
    /// Reached the top of the playfield without hitting anything
    HitTop,
    HitAlien,
}

/// Where and how the laser was destroyed this tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaserBlast {
    pub x: f32,
    pub y: f32,
    pub kind: LaserHitKind,
    /// The alien destroyed, for `HitAlien`
    pub alien: Option<Alien>,
}

/// A bomb that landed on the defender
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BombBlast {
    pub x: f32,
    pub y: f32,
}

/// Per-tick change report consumed by renderers and sound
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StepUpdates {
    pub defender_moved: bool,
    pub laser_created: bool,
    pub laser_exploded: Option<LaserBlast>,
    pub aliens_hit: bool,
    pub bomb_exploded: Option<BombBlast>,
    pub aliens_stepped: bool,
}

impl StepUpdates {
    /// True if nothing changed this tick
    pub fn is_quiet(&self) -> bool {
        *self == StepUpdates::default()
    }
}

/// Complete game state for one level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the shooter RNG was built from (0 for injected selectors)
    pub seed: u64,
    pub score: u64,
    /// Current level (1-based)
    pub level: u32,
    /// Ticks since level start
    pub game_step_count: u64,
    /// Ticks counted against the alien cadence (rebased when it changes)
    pub alien_step_count: u64,
    /// Formation horizontal direction (-1 or +1)
    pub xdir: i8,
    /// Formation vertical direction (0 or +1)
    pub ydir: i8,
    pub defender_dir: MoveDir,
    /// Pending fire request
    pub fire_laser: bool,
    pub laser: Option<Laser>,
    /// Formation in construction order (row-major, top row first)
    pub aliens: Vec<Alien>,
    pub bombs: Vec<Bomb>,
    pub defender: Defender,
    pub game_over: bool,
    pub game_won: bool,
    /// Alien delay used on the previous tick
    pub last_alien_delay: Option<u64>,
}

impl GameState {
    /// Build a fresh level: formation centered, top row at `level - 1`
    pub fn new_level(level: u32, seed: u64) -> Self {
        assert!(level >= 1, "levels start at 1");

        let start_col = (NUM_COLS - NUM_ALIEN_COLS) / 2;
        let start_row = level - 1;

        let mut aliens = Vec::with_capacity(MAX_ALIENS);
        for alien_row in 0..NUM_ALIEN_ROWS {
            let row_index = start_row + alien_row;
            for col_index in start_col..start_col + NUM_ALIEN_COLS {
                aliens.push(Alien::new(
                    alien_row,
                    col_index as f32 * COL_WIDTH,
                    row_index as f32 * ROW_HEIGHT,
                ));
            }
        }

        Self {
            seed,
            score: 0,
            level,
            game_step_count: 0,
            alien_step_count: 0,
            xdir: 1,
            ydir: 0,
            defender_dir: MoveDir::Idle,
            fire_laser: false,
            laser: None,
            aliens,
            bombs: Vec::new(),
            defender: Defender::default(),
            game_over: false,
            game_won: false,
            last_alien_delay: None,
        }
    }

    /// Aliens not yet hit
    pub fn live_aliens(&self) -> impl Iterator<Item = &Alien> {
        self.aliens.iter().filter(|a| !a.dead)
    }

    pub fn num_live_aliens(&self) -> usize {
        self.live_aliens().count()
    }

    /// Either terminal flag is set
    pub fn is_finished(&self) -> bool {
        self.game_over || self.game_won
    }

    /// Lowest live alien in each column, scanned from the back of the list
    pub fn column_front_aliens(&self) -> Vec<&Alien> {
        let mut fronts: Vec<&Alien> = Vec::new();
        for alien in self.aliens.iter().rev().filter(|a| !a.dead) {
            if !fronts.iter().any(|f| f.body.grid_x() == alien.body.grid_x()) {
                fronts.push(alien);
            }
        }
        fronts
    }
}
