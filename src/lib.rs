//! Void Runner - A bullet-hell arena shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, enemy AI, collisions, game state)
//! - `input`: Intent latch between the host event loop and the simulation
//! - `driver`: Fixed timestep pacing
//! - `snapshot`: Render-ready view of the simulation for an external renderer
//! - `settings`: Runtime configuration

pub mod driver;
pub mod input;
pub mod settings;
pub mod sim;
pub mod snapshot;

pub use driver::FixedStepper;
pub use input::{Action, InputLatch, Intent};
pub use settings::{QualityPreset, Settings};
pub use snapshot::RenderFrame;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick (~30 Hz)
    pub const TICK_MS: u64 = 33;
    pub const SIM_DT: f32 = TICK_MS as f32 / 1000.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Arena dimensions (origin-centred)
    pub const WIDTH: f32 = 1000.0;
    pub const HEIGHT: f32 = 700.0;

    /// Player
    pub const PLAYER_SPEED: f32 = 8.0;
    pub const PLAYER_RADIUS: f32 = 12.0;
    pub const PLAYER_START_LIVES: i32 = 3;
    pub const PLAYER_START_BOMBS: u32 = 2;
    pub const MAX_LIVES: i32 = 6;
    pub const MAX_BOMBS: u32 = 5;
    pub const MAX_POWER: u32 = 5;
    /// Frames of invulnerability after being hit
    pub const INVULN_FRAMES: u32 = 90;

    /// Player bullets
    pub const BULLET_RADIUS: f32 = 4.0;
    pub const BULLET_SPEED: f32 = 9.0;
    pub const MAX_BULLETS: usize = 120;

    /// Enemies
    pub const ENEMY_RADIUS: f32 = 14.0;
    pub const ENEMY_BULLET_RADIUS: f32 = 5.0;
    pub const MAX_ENEMIES: usize = 32;
    pub const MAX_ENEMY_BULLETS: usize = 120;
    /// Enemy bullet speeds relative to the hard-mode baseline
    pub const ENEMY_BULLET_SPEED_MUL: f32 = 0.75;
    /// Radial volley size relative to the hard-mode baseline
    pub const RADIAL_COUNT_MUL: f32 = 0.55;

    /// Power-ups
    pub const POWERUP_RADIUS: f32 = 10.0;
    pub const POWERUP_FALL_SPEED: f32 = 1.0;

    /// Culling margins per entity kind
    pub const BULLET_MARGIN: f32 = 40.0;
    pub const ENEMY_MARGIN: f32 = 120.0;
    pub const ENEMY_BULLET_MARGIN: f32 = 60.0;
    pub const POWERUP_MARGIN: f32 = 20.0;

    /// Scoring
    pub const KILL_SCORE: u64 = 25;
    pub const BOMB_KILL_SCORE: u64 = 50;
    pub const KILL_DROP_CHANCE: f64 = 0.15;
    pub const BOMB_DROP_CHANCE: f64 = 0.2;
    pub const SURVIVAL_SCORE_INTERVAL: u64 = 15;

    /// Bomb
    pub const BOMB_CLEAR_RADIUS: f32 = 160.0;
    pub const BOMB_DAMAGE_RADIUS: f32 = 200.0;
    pub const BOMB_DAMAGE: i32 = 3;

    /// Particles
    pub const EXPLOSION_DOTS: usize = 16;
    pub const PLAYER_EXPLOSION_DOTS: usize = 24;
    pub const PARTICLE_LIFE: u32 = 20;
    pub const PARTICLE_DRAG: f32 = 0.96;

    /// Difficulty
    pub const DIFFICULTY_PERIOD_TICKS: u64 = 60;
    pub const DIFFICULTY_RAMP_SECS: f32 = 35.0;
    pub const LEVEL_SECS: f32 = 20.0;
    pub const INITIAL_SPAWN_COOLDOWN: i32 = 30;

    /// Background decoration seed (fixed across restarts)
    pub const STARFIELD_SEED: u64 = 7;
}

/// Clamp `v` into `[lo, hi]`
#[inline]
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    v.max(lo).min(hi)
}

/// True if `pos` lies inside the arena grown by `pad` on every side
#[inline]
pub fn within_bounds(pos: Vec2, pad: f32) -> bool {
    let half_w = consts::WIDTH / 2.0 + pad;
    let half_h = consts::HEIGHT / 2.0 + pad;
    (-half_w..=half_w).contains(&pos.x) && (-half_h..=half_h).contains(&pos.y)
}

/// Circle-circle overlap, boundary inclusive
#[inline]
pub fn circle_hit(a: Vec2, ar: f32, b: Vec2, br: f32) -> bool {
    let r = ar + br;
    a.distance_squared(b) <= r * r
}

/// Unit direction from `from` towards `to`, safe when the points coincide
#[inline]
pub fn direction_to(from: Vec2, to: Vec2) -> Vec2 {
    let delta = to - from;
    delta / (delta.length() + 1e-6)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_hit_boundary_inclusive() {
        let a = Vec2::new(0.0, 0.0);
        assert!(circle_hit(a, 4.0, Vec2::new(9.0, 0.0), 5.0));
        assert!(!circle_hit(a, 4.0, Vec2::new(9.001, 0.0), 5.0));
        assert!(circle_hit(a, 3.0, Vec2::new(3.0, 4.0), 2.0));
    }

    #[test]
    fn test_within_bounds_pad() {
        assert!(within_bounds(Vec2::ZERO, 0.0));
        assert!(within_bounds(Vec2::new(510.0, 0.0), 20.0));
        assert!(!within_bounds(Vec2::new(530.0, 0.0), 20.0));
        assert!(!within_bounds(Vec2::new(0.0, -400.0), 40.0));
    }

    #[test]
    fn test_direction_to_coincident_points() {
        let d = direction_to(Vec2::ONE, Vec2::ONE);
        assert_eq!(d, Vec2::ZERO);
        let d = direction_to(Vec2::ZERO, Vec2::new(0.0, 10.0));
        assert!((d.y - 1.0).abs() < 1e-4);
    }
}
