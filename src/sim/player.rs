//! Player movement and weapon

use glam::Vec2;

use super::state::{Bullet, GameState};
use super::tick::TickInput;
use crate::clamp;
use crate::consts::*;

/// Horizontal spacing between side bullet pairs
const SIDE_OFFSET: f32 = 12.0;
/// Extra angular spread per power level above 1 (radians)
const SPREAD_PER_POWER: f32 = 0.15;

/// Apply movement intents, tick down timers and fire if allowed
pub fn update_player(state: &mut GameState, input: &TickInput) {
    let p = &mut state.player;
    p.invuln = p.invuln.saturating_sub(1);

    let axis = |pos: bool, neg: bool| (pos as i32 - neg as i32) as f32;
    p.vel = Vec2::new(
        axis(input.move_right, input.move_left),
        axis(input.move_up, input.move_down),
    ) * PLAYER_SPEED;
    p.pos.x = clamp(p.pos.x + p.vel.x, -WIDTH / 2.0 + 20.0, WIDTH / 2.0 - 20.0);
    p.pos.y = clamp(p.pos.y + p.vel.y, -HEIGHT / 2.0 + 20.0, HEIGHT / 2.0 - 40.0);

    if p.fire_cd > 0 {
        p.fire_cd -= 1;
    }
    if input.fire && p.fire_cd <= 0 {
        fire_player(state);
    }
}

/// Bullets for one trigger pull at `origin` with the given power level.
///
/// One centred bullet plus `power - 1` side bullets alternating right/left in
/// widening pairs; from power 3 the side bullets fan outward.
pub fn spread_shot(origin: Vec2, power: u32) -> Vec<Bullet> {
    let power = power.clamp(1, MAX_POWER);
    let damage = 1 + (power / 2) as i32;
    let spread = (power - 1) as f32 * SPREAD_PER_POWER;

    let mut bullets = Vec::with_capacity(power as usize);
    bullets.push(Bullet {
        pos: origin + Vec2::new(0.0, 16.0),
        vel: Vec2::new(0.0, BULLET_SPEED),
        damage,
    });

    for i in 0..power - 1 {
        let side = if i % 2 == 0 { 1.0 } else { -1.0 };
        let offset = (i / 2 + 1) as f32 * SIDE_OFFSET * side;
        let angle = if power < 3 { 0.0 } else { spread * side };
        bullets.push(Bullet {
            pos: origin + Vec2::new(offset, 14.0),
            vel: Vec2::new(angle.sin(), angle.cos()) * BULLET_SPEED,
            damage,
        });
    }
    bullets
}

/// Frames between shots; shorter at higher power
pub fn fire_cooldown(power: u32) -> i32 {
    (12 - power.clamp(1, MAX_POWER) as i32 * 2).max(5)
}

/// Fire one volley and keep only the most recent `MAX_BULLETS`
pub fn fire_player(state: &mut GameState) {
    let power = state.player.power;
    state.player.fire_cd = fire_cooldown(power);
    state.bullets.extend(spread_shot(state.player.pos, power));

    let len = state.bullets.len();
    if len > MAX_BULLETS {
        state.bullets.drain(..len - MAX_BULLETS);
    }
}
