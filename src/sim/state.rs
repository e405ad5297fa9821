//! Game state and core simulation types
//!
//! The `GameState` aggregate exclusively owns the player and every entity
//! collection. Entities are plain value records addressed by their position
//! in the owning `Vec`, never by identity.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::starfield::{self, Star};
use crate::consts::*;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Active gameplay
    Running,
    /// Simulation suspended, state preserved
    Paused,
    /// Lives depleted; waiting for restart
    GameOver,
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Game ends when this drops below zero
    pub lives: i32,
    pub bombs: u32,
    /// Frames of invulnerability remaining
    pub invuln: u32,
    /// Weapon level, 1..=5
    pub power: u32,
    /// Frames until the next shot may fire
    pub fire_cd: i32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(0.0, -HEIGHT / 2.0 + 80.0),
            vel: Vec2::ZERO,
            lives: PLAYER_START_LIVES,
            bombs: PLAYER_START_BOMBS,
            invuln: 0,
            power: 1,
            fire_cd: 0,
        }
    }
}

/// A player bullet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub damage: i32,
}

/// Behavioural category of an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Homes in on the player and fires a slow two-bullet spiral
    Chaser,
    /// Weaves horizontally and fires an aimed pair
    Sine,
    /// Drifts and fires radial rings
    Turret,
}

/// An enemy ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub vel: Vec2,
    pub hp: i32,
    pub kind: EnemyKind,
    /// Oscillation phase, advanced every tick
    pub phase: f32,
    /// Frames until the next volley
    pub fire_cd: i32,
}

/// A bullet fired by an enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyBullet {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// +1 weapon level
    Power,
    /// +1 bomb
    Bomb,
    /// +1 life
    Life,
}

/// A falling power-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec2,
    pub vel: Vec2,
    pub kind: PowerUpKind,
}

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Frames remaining
    pub life: u32,
}

impl Bullet {
    /// Integrate one tick; `None` once it leaves the arena
    pub fn advance(mut self) -> Option<Self> {
        self.pos += self.vel;
        crate::within_bounds(self.pos, BULLET_MARGIN).then_some(self)
    }
}

impl EnemyBullet {
    pub fn advance(mut self) -> Option<Self> {
        self.pos += self.vel;
        crate::within_bounds(self.pos, ENEMY_BULLET_MARGIN).then_some(self)
    }
}

impl PowerUp {
    pub fn advance(mut self) -> Option<Self> {
        self.pos += self.vel;
        crate::within_bounds(self.pos, POWERUP_MARGIN).then_some(self)
    }
}

impl Particle {
    /// Integrate with drag and age by one frame
    pub fn advance(mut self) -> Option<Self> {
        self.pos += self.vel;
        self.vel *= PARTICLE_DRAG;
        self.life = self.life.saturating_sub(1);
        (self.life > 0).then_some(self)
    }
}

/// Time-derived difficulty
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Scales spawn rate, enemy speed and volley sizes
    pub multiplier: f32,
    pub level: u32,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            multiplier: 1.0,
            level: 1,
        }
    }
}

impl Difficulty {
    /// Difficulty after `elapsed_secs` of play.
    ///
    /// Time is simulated running time (summed tick `dt`), not the host clock,
    /// so paused stretches never count.
    pub fn at(elapsed_secs: f64) -> Self {
        let elapsed = elapsed_secs.max(0.0);
        Self {
            multiplier: (1.0 + elapsed / f64::from(DIFFICULTY_RAMP_SECS)) as f32,
            level: 1 + (elapsed / f64::from(LEVEL_SECS)).floor() as u32,
        }
    }
}

/// Per-run knobs that survive restarts (derived from `Settings`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    pub max_particles: usize,
    pub show_help: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_particles: 500,
            show_help: true,
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: RunPhase,
    /// Ticks simulated this run
    pub frame: u64,
    /// Simulated seconds of running time this run
    pub elapsed_secs: f64,
    pub score: u64,
    /// Best score this process has seen
    pub hiscore: u64,
    pub difficulty: Difficulty,
    /// Ticks until the next enemy spawn attempt
    pub spawn_cd: i32,
    pub show_help: bool,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub enemy_bullets: Vec<EnemyBullet>,
    pub powerups: Vec<PowerUp>,
    pub particles: Vec<Particle>,
    /// Background decoration
    pub stars: Vec<Star>,
    /// Gameplay randomness (spawns, drops, cooldowns); free-running across restarts
    pub rng: Pcg32,
    /// Cosmetic randomness, re-seeded with `STARFIELD_SEED` on every reset
    pub fx_rng: Pcg32,
    pub config: SimConfig,
}

impl GameState {
    /// Create a new run whose gameplay stream is seeded (reproducible)
    pub fn new(seed: u64) -> Self {
        Self::with_rng(Pcg32::seed_from_u64(seed), SimConfig::default())
    }

    /// Create a new run whose gameplay stream is seeded from OS entropy
    pub fn from_entropy(config: SimConfig) -> Self {
        Self::with_rng(Pcg32::from_rng(&mut rand::rng()), config)
    }

    pub fn with_rng(rng: Pcg32, config: SimConfig) -> Self {
        let mut fx_rng = Pcg32::seed_from_u64(STARFIELD_SEED);
        let stars = starfield::generate(&mut fx_rng);
        Self {
            phase: RunPhase::Running,
            frame: 0,
            elapsed_secs: 0.0,
            score: 0,
            hiscore: 0,
            difficulty: Difficulty::default(),
            spawn_cd: INITIAL_SPAWN_COOLDOWN,
            show_help: config.show_help,
            player: Player::default(),
            bullets: Vec::new(),
            enemies: Vec::new(),
            enemy_bullets: Vec::new(),
            powerups: Vec::new(),
            particles: Vec::new(),
            stars,
            rng,
            fx_rng,
            config,
        }
    }

    /// Discard the run and start a fresh one.
    ///
    /// The high score and the gameplay RNG carry over; everything else,
    /// including the cosmetic stream, starts from scratch.
    pub fn restart(&mut self) {
        let rng = self.rng.clone();
        let hiscore = self.hiscore;
        *self = Self::with_rng(rng, self.config);
        self.hiscore = hiscore;
    }

    pub fn is_running(&self) -> bool {
        self.phase == RunPhase::Running
    }

    /// End the run, recording a new high score if beaten
    pub fn game_over(&mut self) {
        if self.phase == RunPhase::GameOver {
            return;
        }
        self.phase = RunPhase::GameOver;
        if self.score > self.hiscore {
            log::info!("New high score: {} (previous {})", self.score, self.hiscore);
            self.hiscore = self.score;
        }
        log::info!(
            "Game over: score {} at level {} after {} ticks",
            self.score,
            self.difficulty.level,
            self.frame
        );
    }
}
