//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (collection order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod difficulty;
pub mod enemy;
pub mod player;
pub mod spawner;
pub mod starfield;
pub mod state;
pub mod tick;

pub use collision::{KillReward, detonate_bomb, kill_enemy, player_hit, resolve_collisions};
pub use enemy::{AiContext, EnemyStep, Motion, behave};
pub use spawner::{explode, spawn_enemy, spawn_powerup};
pub use starfield::Star;
pub use state::{
    Bullet, Difficulty, Enemy, EnemyBullet, EnemyKind, GameState, Particle, Player, PowerUp,
    PowerUpKind, RunPhase, SimConfig,
};
pub use tick::{TickInput, tick};
