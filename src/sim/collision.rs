//! Projectile collision resolution
//!
//! Pure functions over entity slices; the tick decides when they run.

use super::state::{Alien, Bomb, Defender};
use crate::consts::*;

/// Result of testing the laser against the top wall and the formation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LaserCollision {
    /// Nothing hit, laser keeps flying
    InFlight,
    /// Laser left the playfield at the top
    HitTop,
    /// First live alien (list order) containing the point; already marked dead
    HitAlien(Alien),
}

/// Resolve the laser at point (x, y) against the formation
///
/// Marks the hit alien dead. The caller destroys the laser and adds score.
pub fn resolve_laser(x: f32, y: f32, aliens: &mut [Alien]) -> LaserCollision {
    if y <= 0.0 {
        return LaserCollision::HitTop;
    }

    match aliens
        .iter_mut()
        .find(|a| !a.dead && a.body.contains(x, y))
    {
        Some(alien) => {
            alien.dead = true;
            LaserCollision::HitAlien(*alien)
        }
        None => LaserCollision::InFlight,
    }
}

/// Bombs below this line fell past the defender
pub const BOMB_FLOOR: f32 = GRID_HEIGHT + ROW_HEIGHT;

/// Advance every bomb one move and drop the ones that are done
///
/// Returns the first bomb that landed on the defender. Every bomb inside the
/// defender's box is removed, but only one is reported.
pub fn resolve_bombs(bombs: &mut Vec<Bomb>, defender: &Defender) -> Option<Bomb> {
    let mut exploded: Option<Bomb> = None;

    for bomb in bombs.iter_mut() {
        bomb.body.translate(0.0, BOMB_DY);
    }

    bombs.retain(|bomb| {
        let (x, y) = (bomb.body.grid_x(), bomb.body.grid_y());
        if y > BOMB_FLOOR {
            return false;
        }
        if defender.contains(x, y) {
            if exploded.is_none() {
                exploded = Some(*bomb);
            }
            return false;
        }
        true
    });

    exploded
}
