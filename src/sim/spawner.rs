//! Procedural creation of enemies, power-ups and explosions
//!
//! Spawning is a pure append; callers own the population caps.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, EnemyKind, GameState, Particle, PowerUp, PowerUpKind};
use crate::consts::*;

/// Arena edge an enemy enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Left,
    Right,
}

/// Weighted kind roll: 35% chaser, 35% sine, 30% turret
pub fn roll_kind<R: Rng>(rng: &mut R) -> EnemyKind {
    let t: f32 = rng.random();
    if t < 0.35 {
        EnemyKind::Chaser
    } else if t < 0.7 {
        EnemyKind::Sine
    } else {
        EnemyKind::Turret
    }
}

/// Hit points for a fresh enemy; chasers get one extra
pub fn hit_points(kind: EnemyKind, difficulty: f32) -> i32 {
    let bonus = if kind == EnemyKind::Chaser { 1 } else { 0 };
    1 + (difficulty * 0.6).floor() as i32 + bonus
}

/// Entry point and velocity for an edge, scaled by difficulty
fn entry<R: Rng>(rng: &mut R, edge: Edge, difficulty: f32) -> (Vec2, Vec2) {
    let lateral = 0.8 + difficulty * 0.2;
    match edge {
        Edge::Top => {
            let x = rng.random_range(-WIDTH / 2.0 + 60.0..WIDTH / 2.0 - 60.0);
            let vx = rng.random_range(-1.0..1.0) * lateral;
            let vy = -rng.random_range(2.0..4.0) * (0.8 + difficulty * 0.25);
            (Vec2::new(x, HEIGHT / 2.0 + 20.0), Vec2::new(vx, vy))
        }
        Edge::Left | Edge::Right => {
            let sign = if edge == Edge::Left { 1.0 } else { -1.0 };
            let y = rng.random_range(-HEIGHT / 2.0 + 80.0..HEIGHT / 2.0 - 120.0);
            let vx = sign * rng.random_range(2.2..3.6) * lateral;
            let vy = rng.random_range(-0.6..0.6);
            (Vec2::new(-sign * (WIDTH / 2.0 + 20.0), y), Vec2::new(vx, vy))
        }
    }
}

/// Build one enemy at a random edge
pub fn roll_enemy<R: Rng>(rng: &mut R, difficulty: f32) -> Enemy {
    let edge = match rng.random_range(0..3) {
        0 => Edge::Top,
        1 => Edge::Left,
        _ => Edge::Right,
    };
    let (pos, vel) = entry(rng, edge, difficulty);
    let kind = roll_kind(rng);
    let fire_cd = 20 + (rng.random::<f32>() * 20.0) as i32;

    Enemy {
        pos,
        vel,
        hp: hit_points(kind, difficulty),
        kind,
        phase: 0.0,
        fire_cd,
    }
}

/// Append one enemy to the run
pub fn spawn_enemy(state: &mut GameState) {
    let enemy = roll_enemy(&mut state.rng, state.difficulty.multiplier);
    log::debug!("Spawned {:?} with {} hp at {:?}", enemy.kind, enemy.hp, enemy.pos);
    state.enemies.push(enemy);
}

/// Weighted type roll: 50% power, 30% bomb, 20% life
pub fn roll_powerup_kind<R: Rng>(rng: &mut R) -> PowerUpKind {
    let roll: f32 = rng.random();
    if roll < 0.5 {
        PowerUpKind::Power
    } else if roll < 0.8 {
        PowerUpKind::Bomb
    } else {
        PowerUpKind::Life
    }
}

/// Drop a power-up at `pos`
pub fn spawn_powerup(state: &mut GameState, pos: Vec2) {
    let kind = roll_powerup_kind(&mut state.rng);
    state.powerups.push(PowerUp {
        pos,
        vel: Vec2::new(0.0, -POWERUP_FALL_SPEED),
        kind,
    });
}

/// Radial particle burst; oldest particles are dropped past the cap
pub fn explode(state: &mut GameState, pos: Vec2, dots: usize) {
    for i in 0..dots {
        let angle = TAU * i as f32 / dots as f32;
        let speed = state.fx_rng.random_range(2.0..4.0);
        state.particles.push(Particle {
            pos,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            life: PARTICLE_LIFE,
        });
    }

    let cap = state.config.max_particles;
    if state.particles.len() > cap {
        let excess = state.particles.len() - cap;
        state.particles.drain(..excess);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_kind_distribution() {
        let mut state = GameState::new(2024);
        let n = 10_000;
        for _ in 0..n {
            spawn_enemy(&mut state);
        }

        let share = |kind| {
            state.enemies.iter().filter(|e| e.kind == kind).count() as f32 / n as f32
        };
        assert!((share(EnemyKind::Chaser) - 0.35).abs() < 0.02);
        assert!((share(EnemyKind::Sine) - 0.35).abs() < 0.02);
        assert!((share(EnemyKind::Turret) - 0.30).abs() < 0.02);
    }

    #[test]
    fn test_hit_points_scale_with_difficulty() {
        assert_eq!(hit_points(EnemyKind::Sine, 1.0), 1);
        assert_eq!(hit_points(EnemyKind::Chaser, 1.0), 2);
        assert_eq!(hit_points(EnemyKind::Turret, 1.7), 2);
        assert_eq!(hit_points(EnemyKind::Chaser, 3.4), 4);
    }

    #[test]
    fn test_enemies_enter_from_outside_edges() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..500 {
            let e = roll_enemy(&mut rng, 1.0);
            let from_top = e.pos.y == HEIGHT / 2.0 + 20.0 && e.vel.y < 0.0;
            let from_left = e.pos.x == -WIDTH / 2.0 - 20.0 && e.vel.x > 0.0;
            let from_right = e.pos.x == WIDTH / 2.0 + 20.0 && e.vel.x < 0.0;
            assert!(from_top || from_left || from_right, "bad entry {:?}", e);
            assert!((20..40).contains(&e.fire_cd));
            assert!(e.hp >= 1);
        }
    }

    #[test]
    fn test_powerup_weights() {
        let mut rng = Pcg32::seed_from_u64(11);
        let n = 10_000;
        let rolls: Vec<_> = (0..n).map(|_| roll_powerup_kind(&mut rng)).collect();
        let share = |kind| rolls.iter().filter(|&&k| k == kind).count() as f32 / n as f32;
        assert!((share(PowerUpKind::Power) - 0.5).abs() < 0.02);
        assert!((share(PowerUpKind::Bomb) - 0.3).abs() < 0.02);
        assert!((share(PowerUpKind::Life) - 0.2).abs() < 0.02);
    }

    #[test]
    fn test_powerup_drifts_down() {
        let mut state = GameState::new(1);
        spawn_powerup(&mut state, Vec2::new(10.0, 20.0));
        assert_eq!(state.powerups.len(), 1);
        assert_eq!(state.powerups[0].pos, Vec2::new(10.0, 20.0));
        assert_eq!(state.powerups[0].vel, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_explosion_respects_particle_cap() {
        let mut state = GameState::new(1);
        state.config.max_particles = 20;
        explode(&mut state, Vec2::ZERO, EXPLOSION_DOTS);
        assert_eq!(state.particles.len(), 16);
        explode(&mut state, Vec2::ONE, EXPLOSION_DOTS);
        assert_eq!(state.particles.len(), 20);
        assert_eq!(state.particles[19].pos, Vec2::ONE);
    }
}
