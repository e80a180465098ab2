//! Fixed-cadence simulation tick
//!
//! `Game::step` advances the whole level by one tick. Laser, bombs and the
//! formation each move on their own cadence, counted in ticks.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::{LaserCollision, resolve_bombs, resolve_laser};
use super::state::{
    Bomb, BombBlast, GameState, Laser, LaserBlast, LaserHitKind, MoveDir, ShooterSelect,
    StepUpdates,
};
use crate::consts::*;

/// Ticks between formation steps for `num_aliens` live aliens
///
/// Flat for a nearly full formation, then one tick faster per alien lost.
pub fn alien_step_delay(num_aliens: usize) -> u64 {
    match num_aliens {
        n if n > 50 => 46,
        n if n > 45 => 44,
        n if n > 40 => 42,
        n => n as u64 + 1,
    }
}

/// Ticks between bomb drops for a given alien delay
pub fn bomb_spawn_delay(alien_delay: u64) -> u64 {
    alien_delay.max(MIN_BOMB_SPAWN_DELAY)
}

/// One play session: the level state plus the shooter selection source
pub struct Game<S: ShooterSelect = Pcg32> {
    state: GameState,
    selector: S,
}

impl Game<Pcg32> {
    /// Seeded game starting at `level`
    pub fn new(seed: u64, level: u32) -> Self {
        let mut game = Self::with_selector(Pcg32::seed_from_u64(seed), level);
        game.state.seed = seed;
        game
    }
}

impl<S: ShooterSelect> Game<S> {
    /// Game with an injected shooter selection source
    pub fn with_selector(selector: S, level: u32) -> Self {
        let state = GameState::new_level(level, 0);
        log::info!("Level {} initialized ({} aliens)", level, state.aliens.len());
        Self { state, selector }
    }

    /// Read-only view for renderers
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Rebuild the whole level aggregate
    pub fn init_level(&mut self, level: u32) {
        let seed = self.state.seed;
        self.state = GameState::new_level(level, seed);
        log::info!("Level {} initialized ({} aliens)", level, self.state.aliens.len());
    }

    /// Start the next level, keeping the score
    pub fn advance_level(&mut self) {
        let score = self.state.score;
        self.init_level(self.state.level + 1);
        self.state.score = score;
    }

    /// Continuous horizontal input; persists until changed
    pub fn set_defender_dir(&mut self, dir: MoveDir) {
        self.state.defender_dir = dir;
    }

    /// Request a shot; ignored while a laser is in flight
    pub fn set_fire_laser(&mut self) {
        if self.state.laser.is_none() {
            self.state.fire_laser = true;
        }
    }

    /// Advance the simulation one tick
    ///
    /// `tick` is the caller's frame identifier, used only for logging.
    /// Once the level is won or lost this is a no-op.
    pub fn step(&mut self, tick: u64) -> StepUpdates {
        let mut updates = StepUpdates::default();

        if self.state.is_finished() {
            log::trace!("Tick {} ignored: level already finished", tick);
            return updates;
        }

        let state = &mut self.state;
        state.game_step_count += 1;
        state.alien_step_count += 1;

        // Fire
        if state.fire_laser {
            state.laser = Some(Laser::fired_from(&state.defender));
            state.fire_laser = false;
            updates.laser_created = true;
        }

        // Laser
        if state.game_step_count % LASER_STEP_DELAY == 0 {
            step_laser(state, &mut updates);
        }

        // Bombs
        if state.game_step_count % BOMB_STEP_DELAY == 0 && !state.bombs.is_empty() {
            if let Some(bomb) = resolve_bombs(&mut state.bombs, &state.defender) {
                log::info!(
                    "Defender hit by bomb at ({}, {}) on tick {}",
                    bomb.body.grid_x(),
                    bomb.body.grid_y(),
                    tick
                );
                updates.bomb_exploded = Some(BombBlast {
                    x: bomb.body.grid_x(),
                    y: bomb.body.grid_y(),
                });
                state.game_over = true;
            }
        }

        // Defender
        if state.defender_dir != MoveDir::Idle {
            state.defender.update(state.defender_dir.delta());
            updates.defender_moved = true;
        }

        // Formation
        let num_aliens = state.num_live_aliens();
        let delay = alien_step_delay(num_aliens);
        if let Some(last) = state.last_alien_delay {
            if last != delay {
                state.alien_step_count %= last;
                log::debug!(
                    "Alien delay {} -> {} ({} aliens), step count rebased to {}",
                    last,
                    delay,
                    num_aliens,
                    state.alien_step_count
                );
            }
        }
        state.last_alien_delay = Some(delay);

        if num_aliens > 0 && state.alien_step_count % delay == 0 {
            step_aliens(state);
            updates.aliens_stepped = true;
        }

        // Enemy fire
        if num_aliens > 0 && state.game_step_count % bomb_spawn_delay(delay) == 0 {
            spawn_bomb(state, &mut self.selector);
        }

        state.game_won = num_aliens == 0 && !state.game_over;
        if state.game_won {
            log::info!("Level {} cleared with score {}", state.level, state.score);
        }

        updates
    }
}

/// Move the laser up and test where it was drawn last frame
fn step_laser(state: &mut GameState, updates: &mut StepUpdates) {
    let Some(laser) = state.laser.as_mut() else {
        return;
    };

    laser.body.translate(0.0, LASER_DY);
    let x = laser.body.grid_x();
    let y = laser.body.grid_y() - LASER_DY;

    match resolve_laser(x, y, &mut state.aliens) {
        LaserCollision::InFlight => {}
        LaserCollision::HitTop => {
            state.laser = None;
            updates.laser_exploded = Some(LaserBlast {
                x,
                y,
                kind: LaserHitKind::HitTop,
                alien: None,
            });
        }
        LaserCollision::HitAlien(alien) => {
            state.laser = None;
            state.score += alien.tier.score();
            log::debug!(
                "Laser hit {:?} alien at ({}, {}), score {}",
                alien.tier,
                alien.body.grid_x(),
                alien.body.grid_y(),
                state.score
            );
            updates.laser_exploded = Some(LaserBlast {
                x,
                y,
                kind: LaserHitKind::HitAlien,
                alien: Some(alien),
            });
            updates.aliens_hit = true;
        }
    }
}

/// Move the whole formation one step, bouncing off walls
fn step_aliens(state: &mut GameState) {
    state.aliens.retain(|a| !a.dead);

    let dx = state.xdir as f32;
    let dy = state.ydir as f32;
    let moving_right = state.xdir > 0;

    let mut hit_wall = false;
    let mut reached_floor = false;

    for alien in &mut state.aliens {
        alien.update(dx, dy);

        let x = alien.body.grid_x();
        if (moving_right && x + COL_WIDTH == GRID_WIDTH) || (!moving_right && x == 0.0) {
            hit_wall = true;
        }
        if alien.body.grid_y() >= GRID_HEIGHT - 1.0 {
            reached_floor = true;
        }
    }

    if hit_wall {
        state.xdir = -state.xdir;
        state.ydir = 1;
        log::debug!("Formation hit wall, now moving {}", state.xdir);
    } else {
        state.ydir = 0;
    }

    if reached_floor {
        log::info!("Aliens reached the defender's row");
        state.game_over = true;
    }
}

/// Drop a bomb from a random column-front alien
fn spawn_bomb<S: ShooterSelect>(state: &mut GameState, selector: &mut S) {
    let fronts = state.column_front_aliens();
    if fronts.is_empty() {
        return;
    }

    let index = selector.pick(fronts.len());
    assert!(
        index < fronts.len(),
        "shooter index {} out of range for {} candidates",
        index,
        fronts.len()
    );

    let bomb = Bomb::dropped_by(fronts[index]);
    log::debug!(
        "Bomb dropped at ({}, {})",
        bomb.body.grid_x(),
        bomb.body.grid_y()
    );
    state.bombs.push(bomb);
}
