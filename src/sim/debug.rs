//! ASCII view of the playfield for logs and tests

use super::state::GameState;
use crate::consts::*;

/// Render the grid one character per grid unit
///
/// Aliens fill their column interior with `X`, the defender is a row of `^`,
/// the laser is `|` and bombs are `*`. The last row is the defender's row.
pub fn debug_render(state: &GameState) -> String {
    let width = GRID_WIDTH as usize;
    let height = GRID_HEIGHT as usize + 1;
    let mut grid = vec![vec![' '; width]; height];

    let mut plot = |x: f32, y: f32, c: char| {
        if x < 0.0 || y < 0.0 {
            return;
        }
        let (col, row) = (x as usize, y as usize);
        if row < height && col < width {
            grid[row][col] = c;
        }
    };

    for alien in state.live_aliens() {
        let x = alien.body.grid_x();
        let mut k = x + 1.0;
        while k < x + COL_WIDTH - 1.0 {
            plot(k, alien.body.grid_y(), 'X');
            k += 1.0;
        }
    }

    let defender = state.defender.body.bounds();
    let mut k = defender.x;
    while k < defender.x + defender.width {
        plot(k, defender.y, '^');
        k += 1.0;
    }

    if let Some(laser) = &state.laser {
        plot(laser.body.grid_x(), laser.body.grid_y(), '|');
    }
    for bomb in &state.bombs {
        plot(bomb.body.grid_x(), bomb.body.grid_y(), '*');
    }

    let rows: Vec<String> = grid
        .iter()
        .map(|row| format!("|{}|", row.iter().collect::<String>()))
        .collect();
    format!(
        "step: {} score: {}\n{}",
        state.game_step_count,
        state.score,
        rows.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Bomb, Laser};

    #[test]
    fn test_render_fresh_level() {
        let state = GameState::new_level(1, 0);
        let out = debug_render(&state);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "step: 0 score: 0");
        // Header plus GRID_HEIGHT rows plus the defender row
        assert_eq!(lines.len(), 22);
        // 11 aliens per formation row, 6 interior cells each
        assert_eq!(lines[1].matches('X').count(), 66);
        assert_eq!(lines[2].matches('X').count(), 0);
        // Column 1 interior starts at x=9, offset by the leading border
        assert_eq!(&lines[1][..16], "|         XXXXXX");
        assert_eq!(lines[21].matches('^').count(), 8);
    }

    #[test]
    fn test_render_projectiles() {
        let mut state = GameState::new_level(1, 0);
        state.laser = Some(Laser::new(52.0, 15.0));
        state.bombs.push(Bomb::new(20.0, 12.2, 0.0));
        // Out of the picture; must not panic
        state.bombs.push(Bomb::new(20.0, 40.0, 0.0));
        let out = debug_render(&state);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[16].chars().nth(53), Some('|'));
        assert_eq!(lines[13].chars().nth(21), Some('*'));
    }

    #[test]
    fn test_dead_aliens_not_drawn() {
        let mut state = GameState::new_level(1, 0);
        for alien in state.aliens.iter_mut().take(11) {
            alien.dead = true;
        }
        let out = debug_render(&state);
        assert_eq!(out.lines().nth(1).map(|l| l.matches('X').count()), Some(0));
    }
}
