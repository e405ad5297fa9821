//! Hit detection and resolution
//!
//! Everything is circle-vs-circle. Passes run in a fixed order each tick:
//! player bullets vs enemies, hazards vs player, then power-up pickups.
//! Collections are never mutated while being scanned; each pass builds the
//! survivor list and swaps it in.

use glam::Vec2;
use rand::Rng;

use super::spawner::{explode, spawn_powerup};
use super::state::{GameState, PowerUpKind};
use crate::circle_hit;
use crate::consts::*;

/// Score and drop odds for a kill
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KillReward {
    pub score: u64,
    pub drop_chance: f64,
}

impl KillReward {
    pub const BULLET: Self = Self {
        score: KILL_SCORE,
        drop_chance: KILL_DROP_CHANCE,
    };
    pub const BOMB: Self = Self {
        score: BOMB_KILL_SCORE,
        drop_chance: BOMB_DROP_CHANCE,
    };
}

/// Run all collision passes in order
pub fn resolve_collisions(state: &mut GameState) {
    bullets_vs_enemies(state);
    hazards_vs_player(state);
    powerups_vs_player(state);
}

/// Side effects of destroying an enemy at `pos`
pub fn kill_enemy(state: &mut GameState, pos: Vec2, reward: KillReward) {
    state.score += reward.score;
    explode(state, pos, EXPLOSION_DOTS);
    if state.rng.random_bool(reward.drop_chance) {
        spawn_powerup(state, pos);
    }
}

/// Keep the entries of `items` whose flag in `alive` is set
fn compact<T>(items: &mut Vec<T>, alive: &[bool]) {
    let mut flags = alive.iter();
    items.retain(|_| flags.next().copied().unwrap_or(true));
}

/// Each bullet damages at most the first enemy it overlaps
fn bullets_vs_enemies(state: &mut GameState) {
    if state.bullets.is_empty() || state.enemies.is_empty() {
        return;
    }

    let bullets = std::mem::take(&mut state.bullets);
    let mut alive = vec![true; state.enemies.len()];
    let mut kills = Vec::new();
    let mut survivors = Vec::with_capacity(bullets.len());

    for bullet in bullets {
        let target = state.enemies.iter().enumerate().position(|(i, e)| {
            alive[i] && circle_hit(bullet.pos, BULLET_RADIUS, e.pos, ENEMY_RADIUS)
        });

        match target {
            Some(i) => {
                let enemy = &mut state.enemies[i];
                enemy.hp -= bullet.damage;
                if enemy.hp <= 0 {
                    alive[i] = false;
                    kills.push(enemy.pos);
                }
            }
            None => survivors.push(bullet),
        }
    }

    state.bullets = survivors;
    compact(&mut state.enemies, &alive);
    for pos in kills {
        kill_enemy(state, pos, KillReward::BULLET);
    }
}

/// At most one hit per tick, and none while invulnerable
fn hazards_vs_player(state: &mut GameState) {
    if state.player.invuln > 0 || !state.is_running() {
        return;
    }
    let p = state.player.pos;

    if let Some(i) = state
        .enemy_bullets
        .iter()
        .position(|b| circle_hit(p, PLAYER_RADIUS, b.pos, ENEMY_BULLET_RADIUS))
    {
        state.enemy_bullets.remove(i);
        player_hit(state);
        return;
    }

    if let Some(i) = state
        .enemies
        .iter()
        .position(|e| circle_hit(p, PLAYER_RADIUS + 4.0, e.pos, ENEMY_RADIUS))
    {
        let enemy = state.enemies.remove(i);
        player_hit(state);
        explode(state, enemy.pos, EXPLOSION_DOTS);
    }
}

fn powerups_vs_player(state: &mut GameState) {
    let p = state.player.pos;
    let powerups = std::mem::take(&mut state.powerups);
    let mut survivors = Vec::with_capacity(powerups.len());

    for powerup in powerups {
        if !circle_hit(p, PLAYER_RADIUS + 6.0, powerup.pos, POWERUP_RADIUS) {
            survivors.push(powerup);
            continue;
        }
        let player = &mut state.player;
        match powerup.kind {
            PowerUpKind::Power => player.power = (player.power + 1).min(MAX_POWER),
            PowerUpKind::Bomb => player.bombs = (player.bombs + 1).min(MAX_BOMBS),
            PowerUpKind::Life => player.lives = (player.lives + 1).min(MAX_LIVES),
        }
        log::debug!("Picked up {:?}", powerup.kind);
    }

    state.powerups = survivors;
}

/// Lose a life, demote the weapon and start the invulnerability window
pub fn player_hit(state: &mut GameState) {
    let player = &mut state.player;
    player.lives -= 1;
    player.invuln = INVULN_FRAMES;
    player.power = player.power.saturating_sub(1).max(1);
    let pos = player.pos;
    explode(state, pos, PLAYER_EXPLOSION_DOTS);

    if state.player.lives < 0 {
        state.game_over();
    }
}

/// Detonate a bomb around the player.
///
/// Clears enemy bullets within `BOMB_CLEAR_RADIUS` and deals `BOMB_DAMAGE` to
/// enemies within `BOMB_DAMAGE_RADIUS`. Returns false if no bomb was left.
pub fn detonate_bomb(state: &mut GameState) -> bool {
    if !state.is_running() || state.player.bombs == 0 {
        return false;
    }
    state.player.bombs -= 1;
    let p = state.player.pos;

    state
        .enemy_bullets
        .retain(|b| !circle_hit(p, BOMB_CLEAR_RADIUS, b.pos, ENEMY_BULLET_RADIUS));

    let mut alive = vec![true; state.enemies.len()];
    let mut kills = Vec::new();
    for (i, enemy) in state.enemies.iter_mut().enumerate() {
        if circle_hit(p, BOMB_DAMAGE_RADIUS, enemy.pos, ENEMY_RADIUS) {
            enemy.hp -= BOMB_DAMAGE;
            if enemy.hp <= 0 {
                alive[i] = false;
                kills.push(enemy.pos);
            }
        }
    }
    compact(&mut state.enemies, &alive);
    for pos in kills {
        kill_enemy(state, pos, KillReward::BOMB);
    }

    log::debug!("Bomb detonated, {} left", state.player.bombs);
    true
}
