//! Difficulty progression and enemy spawn pacing

use rand::Rng;

use super::spawner::spawn_enemy;
use super::state::{Difficulty, GameState};
use crate::consts::*;

/// Shortest spawn interval for the current difficulty (ticks)
pub fn min_spawn_cooldown(difficulty: f32) -> i32 {
    (30 - (difficulty * 2.0) as i32).max(12)
}

/// Recompute difficulty on its period and spawn an enemy when due
pub fn step_difficulty(state: &mut GameState) {
    if state.frame % DIFFICULTY_PERIOD_TICKS == 0 {
        let next = Difficulty::at(state.elapsed_secs);
        if next.level > state.difficulty.level {
            log::info!("Level {} (difficulty {:.2})", next.level, next.multiplier);
        } else {
            log::debug!("Difficulty {:.2}", next.multiplier);
        }
        state.difficulty = next;
    }

    state.spawn_cd -= 1;
    if state.spawn_cd <= 0 && state.enemies.len() < MAX_ENEMIES {
        spawn_enemy(state);
        let min_cd = min_spawn_cooldown(state.difficulty.multiplier);
        state.spawn_cd = state.rng.random_range(min_cd..=min_cd + 10);
    }
}
