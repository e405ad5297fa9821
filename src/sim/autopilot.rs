//! Demo mode - a simple AI that plays the game
//!
//! Produces the intents a player would hold for the next tick. It dodges
//! nearby enemy fire, grabs power-ups when nothing is threatening and
//! otherwise lines up beneath the closest enemy with the trigger held.

use glam::Vec2;

use super::state::{GameState, RunPhase};
use super::tick::TickInput;
use crate::consts::*;

/// Bullets closer than this are dodged
const DANGER_RADIUS: f32 = 90.0;
/// Enemies closer than this are dodged
const BODY_DANGER_RADIUS: f32 = 80.0;
/// Bomb when this many bullets are inside the clear radius
const BOMB_CROWD: usize = 8;
const BOMB_CROWD_RADIUS: f32 = BOMB_CLEAR_RADIUS * 0.75;
/// Distance under which the ship stops adjusting
const DEADZONE: f32 = 4.0;
/// Preferred cruising height
const HOME_Y: f32 = -HEIGHT / 2.0 + 80.0;

/// Decide the input for the next tick
pub fn drive(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    if state.phase != RunPhase::Running {
        return input;
    }
    input.fire = true;

    let p = state.player.pos;

    let crowd = state
        .enemy_bullets
        .iter()
        .filter(|b| b.pos.distance(p) < BOMB_CROWD_RADIUS)
        .count();
    input.bomb = state.player.bombs > 0 && state.player.invuln == 0 && crowd >= BOMB_CROWD;

    // Push away from everything dangerous, weighted by proximity
    let mut dodge = Vec2::ZERO;
    for b in &state.enemy_bullets {
        let away = p - b.pos;
        let dist = away.length();
        let approaching = b.vel.dot(away) > 0.0;
        if dist < DANGER_RADIUS && approaching {
            dodge += away.normalize_or_zero() * (1.0 - dist / DANGER_RADIUS);
        }
    }
    for e in &state.enemies {
        let away = p - e.pos;
        let dist = away.length();
        if dist < BODY_DANGER_RADIUS {
            dodge += away.normalize_or_zero() * 2.0 * (1.0 - dist / BODY_DANGER_RADIUS);
        }
    }

    let target = if dodge.length_squared() > 0.01 {
        p + dodge.normalize() * 50.0
    } else if let Some(pickup) = nearest(p, state.powerups.iter().map(|pw| pw.pos)) {
        pickup
    } else if let Some(enemy) = nearest(p, state.enemies.iter().map(|e| e.pos)) {
        Vec2::new(enemy.x, HOME_Y)
    } else {
        Vec2::new(0.0, HOME_Y)
    };

    let delta = target - p;
    input.move_right = delta.x > DEADZONE;
    input.move_left = delta.x < -DEADZONE;
    input.move_up = delta.y > DEADZONE;
    input.move_down = delta.y < -DEADZONE;
    input
}

fn nearest(from: Vec2, points: impl Iterator<Item = Vec2>) -> Option<Vec2> {
    points.min_by(|a, b| {
        a.distance_squared(from)
            .partial_cmp(&b.distance_squared(from))
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}
