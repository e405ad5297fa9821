//! Render-ready snapshot of the simulation
//!
//! The renderer never touches `GameState`. Each frame it receives a
//! `RenderFrame` copied out of the state, plus an optional flat list of
//! circle sprites that can be uploaded to a GPU buffer as-is.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use serde::Serialize;

use crate::consts::*;
use crate::sim::{
    Bullet, Enemy, EnemyBullet, EnemyKind, GameState, Particle, Player, PowerUp, PowerUpKind,
    RunPhase, Star,
};

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.03, 0.03, 0.05, 1.0];
    pub const STAR_DIM: [f32; 4] = [0.35, 0.4, 0.55, 1.0];
    pub const STAR_BRIGHT: [f32; 4] = [0.6, 0.65, 0.85, 1.0];
    pub const PARTICLE: [f32; 4] = [1.0, 0.7, 0.2, 1.0];
    pub const TURRET: [f32; 4] = [0.8, 0.2, 0.8, 1.0];
    pub const SINE: [f32; 4] = [0.9, 0.5, 0.1, 1.0];
    pub const CHASER: [f32; 4] = [0.6, 0.9, 0.2, 1.0];
    pub const ENEMY_BULLET: [f32; 4] = [0.95, 0.3, 0.3, 1.0];
    pub const PLAYER_BULLET: [f32; 4] = [0.4, 0.9, 1.0, 1.0];
    pub const POWER: [f32; 4] = [0.3, 1.0, 0.5, 1.0];
    pub const BOMB: [f32; 4] = [1.0, 0.95, 0.3, 1.0];
    pub const LIFE: [f32; 4] = [0.5, 0.8, 1.0, 1.0];
    pub const PLAYER: [f32; 4] = [0.2, 0.95, 0.85, 1.0];
    pub const HUD_TEXT: [f32; 4] = [0.85, 0.92, 1.0, 1.0];
}

pub const HELP_TEXT: &str = "Move: WASD/Arrows | Fire: Space | Bomb: B | Pause: P | Help: H";

/// A filled circle, laid out for direct GPU upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    pub position: [f32; 2],
    pub radius: f32,
    pub _pad: f32,
    pub color: [f32; 4],
}

impl SpriteInstance {
    pub const fn new(pos: Vec2, radius: f32, color: [f32; 4]) -> Self {
        Self {
            position: [pos.x, pos.y],
            radius,
            _pad: 0.0,
            color,
        }
    }
}

/// Values for the HUD text line and overlays
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    pub score: u64,
    pub hiscore: u64,
    pub level: u32,
    pub lives: i32,
    pub bombs: u32,
    pub power: u32,
    pub phase: RunPhase,
    pub show_help: bool,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct RenderFrame {
    /// Arena width and height, centred on the origin
    pub arena: Vec2,
    pub player: Player,
    /// False on the off-beats of the invulnerability blink
    pub player_visible: bool,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub enemy_bullets: Vec<EnemyBullet>,
    pub powerups: Vec<PowerUp>,
    pub particles: Vec<Particle>,
    pub stars: Vec<Star>,
    pub hud: Hud,
}

impl RenderFrame {
    pub fn capture(state: &GameState) -> Self {
        let player = state.player.clone();
        let blink_off = player.invuln > 0 && (state.frame / 6) % 2 == 0;

        Self {
            arena: Vec2::new(WIDTH, HEIGHT),
            player_visible: !blink_off,
            enemies: state.enemies.clone(),
            bullets: state.bullets.clone(),
            enemy_bullets: state.enemy_bullets.clone(),
            powerups: state.powerups.clone(),
            particles: state.particles.clone(),
            stars: state.stars.clone(),
            hud: Hud {
                score: state.score,
                hiscore: state.hiscore,
                level: state.difficulty.level,
                lives: player.lives,
                bombs: player.bombs,
                power: player.power,
                phase: state.phase,
                show_help: state.show_help,
            },
            player,
        }
    }

    /// Sprites in back-to-front draw order
    pub fn sprites(&self, bright_stars: bool) -> Vec<SpriteInstance> {
        let mut out = Vec::with_capacity(
            self.stars.len()
                + self.particles.len()
                + self.enemies.len()
                + self.enemy_bullets.len()
                + self.bullets.len()
                + self.powerups.len()
                + 1,
        );

        for star in self.stars.iter().filter(|s| bright_stars || !s.bright) {
            let color = if star.bright {
                colors::STAR_BRIGHT
            } else {
                colors::STAR_DIM
            };
            out.push(SpriteInstance::new(star.pos, 1.0, color));
        }
        for p in &self.particles {
            out.push(SpriteInstance::new(p.pos, 1.5, colors::PARTICLE));
        }
        for e in &self.enemies {
            let color = match e.kind {
                EnemyKind::Turret => colors::TURRET,
                EnemyKind::Sine => colors::SINE,
                EnemyKind::Chaser => colors::CHASER,
            };
            out.push(SpriteInstance::new(e.pos, ENEMY_RADIUS, color));
        }
        for b in &self.enemy_bullets {
            out.push(SpriteInstance::new(b.pos, ENEMY_BULLET_RADIUS, colors::ENEMY_BULLET));
        }
        for b in &self.bullets {
            out.push(SpriteInstance::new(b.pos, BULLET_RADIUS, colors::PLAYER_BULLET));
        }
        for pw in &self.powerups {
            let color = match pw.kind {
                PowerUpKind::Power => colors::POWER,
                PowerUpKind::Bomb => colors::BOMB,
                PowerUpKind::Life => colors::LIFE,
            };
            out.push(SpriteInstance::new(pw.pos, 6.0, color));
        }
        if self.player_visible {
            out.push(SpriteInstance::new(self.player.pos, PLAYER_RADIUS, colors::PLAYER));
        }
        out
    }

    /// Raw bytes of `sprites`, ready for a vertex/instance buffer
    pub fn sprite_bytes(&self, bright_stars: bool) -> Vec<u8> {
        bytemuck::cast_slice(&self.sprites(bright_stars)).to_vec()
    }

    pub fn status_line(&self) -> String {
        let h = &self.hud;
        format!(
            "Score: {}   Hi: {}   Lives: {}   Bombs: {}   Power: {}   Lv: {}",
            h.score, h.hiscore, h.lives, h.bombs, h.power, h.level
        )
    }

    /// Centered overlay text, if any
    pub fn banner(&self) -> Option<&'static str> {
        match self.hud.phase {
            RunPhase::GameOver => Some("GAME OVER"),
            RunPhase::Paused => Some("PAUSED"),
            RunPhase::Running => None,
        }
    }

    /// Help line, shown only while a run is live
    pub fn help(&self) -> Option<&'static str> {
        (self.hud.show_help && self.hud.phase != RunPhase::GameOver).then_some(HELP_TEXT)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
