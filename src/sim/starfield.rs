//! Background starfield
//!
//! Purely decorative. Generated from the cosmetic stream right after it is
//! seeded, so every run draws the same sky.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{HEIGHT, WIDTH};

pub const DIM_STARS: usize = 130;
pub const BRIGHT_STARS: usize = 45;
/// Stars keep this far from the arena edge
const EDGE_INSET: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub bright: bool,
}

/// Scatter the dim layer, then the bright layer
pub fn generate<R: Rng>(rng: &mut R) -> Vec<Star> {
    let half_w = WIDTH as i32 / 2 - EDGE_INSET;
    let half_h = HEIGHT as i32 / 2 - EDGE_INSET;

    (0..DIM_STARS + BRIGHT_STARS)
        .map(|i| {
            let x = rng.random_range(-half_w..=half_w);
            let y = rng.random_range(-half_h..=half_h);
            Star {
                pos: Vec2::new(x as f32, y as f32),
                bright: i >= DIM_STARS,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_starfield_is_stable_per_seed() {
        let a = generate(&mut Pcg32::seed_from_u64(7));
        let b = generate(&mut Pcg32::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(a.len(), DIM_STARS + BRIGHT_STARS);
        assert_eq!(a.iter().filter(|s| s.bright).count(), BRIGHT_STARS);
    }

    #[test]
    fn test_stars_inside_inset_arena() {
        for star in generate(&mut Pcg32::seed_from_u64(7)) {
            assert!(star.pos.x.abs() <= 490.0);
            assert!(star.pos.y.abs() <= 340.0);
        }
    }
}
