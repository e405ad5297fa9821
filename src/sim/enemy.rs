//! Enemy movement and firing
//!
//! Each kind's per-tick behaviour is a pure function of the enemy and a small
//! read-only view of the world. The caller applies the resulting motion,
//! appends any volley and rolls the next cooldown.

use std::f32::consts::{PI, TAU};

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, EnemyBullet, EnemyKind, GameState};
use crate::consts::*;
use crate::{direction_to, within_bounds};

/// Phase advance per tick
const PHASE_STEP: f32 = 0.05;
/// Angular offset of the sine weaver's aimed pair (radians)
const AIM_SPREAD: f32 = 0.12;
/// Spiral rotation per global frame for chasers (radians)
const SPIRAL_STEP: f32 = 0.08;

/// What an enemy may observe while deciding its next step
#[derive(Debug, Clone, Copy)]
pub struct AiContext {
    pub player_pos: Vec2,
    pub difficulty: f32,
    pub frame: u64,
    /// False while the enemy bullet population is at its cap
    pub can_fire: bool,
}

/// Kinematic part of an enemy after one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub pos: Vec2,
    pub vel: Vec2,
    pub phase: f32,
    pub fire_cd: i32,
}

/// Result of one behaviour step
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyStep {
    pub motion: Motion,
    /// Bullets fired this tick; the caller must reset the cooldown
    pub volley: Option<Vec<EnemyBullet>>,
}

/// Advance one enemy by a tick
pub fn behave(enemy: &Enemy, ctx: &AiContext) -> EnemyStep {
    let phase = enemy.phase + PHASE_STEP;
    let d = ctx.difficulty;
    let mut vel = enemy.vel;

    let pos = match enemy.kind {
        EnemyKind::Sine => {
            let weave = (phase * 3.0).sin() * (1.8 + 0.3 * d);
            enemy.pos + Vec2::new(vel.x * 0.6 + weave, vel.y)
        }
        EnemyKind::Chaser => {
            // Speed is intentionally unbounded
            vel += direction_to(enemy.pos, ctx.player_pos) * 0.05 * (1.0 + 0.2 * d);
            enemy.pos + vel
        }
        EnemyKind::Turret => enemy.pos + vel * 0.8,
    };

    let fire_cd = enemy.fire_cd - 1;
    let fired = (fire_cd <= 0 && ctx.can_fire).then(|| volley(enemy.kind, pos, ctx));

    EnemyStep {
        motion: Motion {
            pos,
            vel,
            phase,
            fire_cd,
        },
        volley: fired,
    }
}

/// Kind-specific bullet pattern fired from `origin`
pub fn volley(kind: EnemyKind, origin: Vec2, ctx: &AiContext) -> Vec<EnemyBullet> {
    let d = ctx.difficulty;
    let shot = |angle: f32, speed: f32| EnemyBullet {
        pos: origin,
        vel: Vec2::from_angle(angle) * speed * ENEMY_BULLET_SPEED_MUL,
    };

    match kind {
        EnemyKind::Turret => {
            let base = 6 + (d * 0.8) as i32;
            let n = ((base as f32 * RADIAL_COUNT_MUL) as i32).max(4);
            let speed = 2.5 + 0.2 * d;
            (0..n)
                .map(|i| shot(TAU * i as f32 / n as f32, speed))
                .collect()
        }
        EnemyKind::Sine => {
            let delta = ctx.player_pos - origin;
            let aim = delta.y.atan2(delta.x);
            let speed = 3.0 + 0.2 * d;
            [-AIM_SPREAD, AIM_SPREAD]
                .into_iter()
                .map(|da| shot(aim + da, speed))
                .collect()
        }
        EnemyKind::Chaser => {
            let base = ctx.frame as f32 * SPIRAL_STEP;
            let speed = 2.0 + 0.15 * d;
            (0..2).map(|i| shot(base + i as f32 * PI, speed)).collect()
        }
    }
}

/// Next volley countdown; shrinks as difficulty rises
pub fn refire_cooldown<R: Rng>(rng: &mut R, difficulty: f32) -> i32 {
    let base = (56.0 - (difficulty * 2.0).min(20.0)) as i32;
    base + rng.random_range(-4..=10)
}

/// Move every enemy, fire due volleys and cull those that left the arena
pub fn update_enemies(state: &mut GameState) {
    let enemies = std::mem::take(&mut state.enemies);
    let mut survivors = Vec::with_capacity(enemies.len());

    for mut enemy in enemies {
        let ctx = AiContext {
            player_pos: state.player.pos,
            difficulty: state.difficulty.multiplier,
            frame: state.frame,
            can_fire: state.enemy_bullets.len() < MAX_ENEMY_BULLETS,
        };
        let step = behave(&enemy, &ctx);

        enemy.pos = step.motion.pos;
        enemy.vel = step.motion.vel;
        enemy.phase = step.motion.phase;
        enemy.fire_cd = step.motion.fire_cd;

        if let Some(bullets) = step.volley {
            state.enemy_bullets.extend(bullets);
            enemy.fire_cd = refire_cooldown(&mut state.rng, ctx.difficulty);
        }

        if within_bounds(enemy.pos, ENEMY_MARGIN) {
            survivors.push(enemy);
        }
    }

    state.enemies = survivors;

    let len = state.enemy_bullets.len();
    if len > MAX_ENEMY_BULLETS {
        state.enemy_bullets.drain(..len - MAX_ENEMY_BULLETS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn enemy(kind: EnemyKind) -> Enemy {
        Enemy {
            pos: Vec2::new(0.0, 100.0),
            vel: Vec2::new(1.0, -2.0),
            hp: 1,
            kind,
            phase: 0.0,
            fire_cd: 30,
        }
    }

    fn ctx() -> AiContext {
        AiContext {
            player_pos: Vec2::new(0.0, -200.0),
            difficulty: 1.0,
            frame: 0,
            can_fire: true,
        }
    }

    #[test]
    fn test_turret_drifts_at_reduced_speed() {
        let step = behave(&enemy(EnemyKind::Turret), &ctx());
        assert!((step.motion.pos - Vec2::new(0.8, 98.4)).length() < 1e-4);
        assert_eq!(step.motion.vel, Vec2::new(1.0, -2.0));
        assert_eq!(step.motion.fire_cd, 29);
        assert!(step.volley.is_none());
    }

    #[test]
    fn test_sine_weaves_horizontally() {
        let step = behave(&enemy(EnemyKind::Sine), &ctx());
        let weave = (0.05f32 * 3.0).sin() * 2.1;
        assert!((step.motion.pos.x - (0.6 + weave)).abs() < 1e-5);
        assert!((step.motion.pos.y - 98.0).abs() < 1e-5);
        assert!((step.motion.phase - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_chaser_accelerates_toward_player() {
        let mut e = enemy(EnemyKind::Chaser);
        e.vel = Vec2::ZERO;
        let step = behave(&e, &ctx());
        // Player is straight below: 0.05 * 1.2
        assert!((step.motion.vel.y + 0.06).abs() < 1e-5);
        assert!(step.motion.vel.x.abs() < 1e-6);
        assert_eq!(step.motion.pos, e.pos + step.motion.vel);

        // Keeps accelerating without a cap
        for _ in 0..500 {
            let step = behave(&e, &ctx());
            e.pos = Vec2::new(0.0, 100.0);
            e.vel = step.motion.vel;
        }
        assert!(e.vel.length() > 20.0);
    }

    #[test]
    fn test_fires_when_cooldown_elapses() {
        let mut e = enemy(EnemyKind::Sine);
        e.fire_cd = 1;
        let step = behave(&e, &ctx());
        let volley = step.volley.expect("cooldown elapsed");
        assert_eq!(volley.len(), 2);
        for b in &volley {
            assert_eq!(b.pos, step.motion.pos);
            // Aimed downward at the player
            assert!(b.vel.y < 0.0);
            assert!((b.vel.length() - 3.2 * 0.75).abs() < 1e-4);
        }

        let blocked = AiContext {
            can_fire: false,
            ..ctx()
        };
        assert!(behave(&e, &blocked).volley.is_none());
    }

    #[test]
    fn test_turret_ring_grows_with_difficulty() {
        let at = |difficulty| {
            let c = AiContext { difficulty, ..ctx() };
            volley(EnemyKind::Turret, Vec2::ZERO, &c).len()
        };
        assert_eq!(at(1.0), 4);
        assert_eq!(at(5.0), 5);
        assert_eq!(at(10.0), 7);
    }

    #[test]
    fn test_chaser_spiral_pair_is_opposed() {
        let c = AiContext { frame: 40, ..ctx() };
        let v = volley(EnemyKind::Chaser, Vec2::ZERO, &c);
        assert_eq!(v.len(), 2);
        assert!((v[0].vel + v[1].vel).length() < 1e-4);
        let expected = Vec2::from_angle(40.0 * 0.08) * 2.15 * 0.75;
        assert!((v[0].vel - expected).length() < 1e-4);
    }

    #[test]
    fn test_refire_cooldown_shrinks() {
        let mut rng = Pcg32::seed_from_u64(9);
        for _ in 0..200 {
            let early = refire_cooldown(&mut rng, 1.0);
            assert!((50..=64).contains(&early));
            let late = refire_cooldown(&mut rng, 15.0);
            assert!((32..=46).contains(&late));
        }
    }

    #[test]
    fn test_update_culls_far_enemies_and_caps_bullets() {
        let mut state = GameState::new(4);
        let mut far = enemy(EnemyKind::Turret);
        far.pos = Vec2::new(WIDTH / 2.0 + 119.5, 0.0);
        far.vel = Vec2::new(5.0, 0.0);
        state.enemies.push(far);
        let mut near = enemy(EnemyKind::Turret);
        near.fire_cd = 1;
        state.enemies.push(near);

        update_enemies(&mut state);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemy_bullets.len(), 4);
        assert!(state.enemies[0].fire_cd >= 50);

        state.enemy_bullets = vec![
            EnemyBullet {
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
            };
            MAX_ENEMY_BULLETS
        ];
        state.enemies[0].fire_cd = 1;
        update_enemies(&mut state);
        assert_eq!(state.enemy_bullets.len(), MAX_ENEMY_BULLETS);
        assert!(state.enemies[0].fire_cd <= 0);
    }
}
