//! End-to-end checks driving the simulation through the public surface

use glam::Vec2;
use proptest::prelude::*;

use void_runner::consts::*;
use void_runner::sim::{Enemy, EnemyKind, GameState, RunPhase, TickInput, tick};
use void_runner::{Action, FixedStepper, Intent, circle_hit};

fn parked_turret(pos: Vec2) -> Enemy {
    Enemy {
        pos,
        vel: Vec2::ZERO,
        hp: 1,
        kind: EnemyKind::Turret,
        phase: 0.0,
        fire_cd: 1000,
    }
}

fn input_from_bits(bits: u8) -> TickInput {
    TickInput {
        move_up: bits & 1 != 0,
        move_down: bits & 2 != 0,
        move_left: bits & 4 != 0,
        move_right: bits & 8 != 0,
        fire: bits & 16 != 0,
        pause: bits & 32 != 0,
        help: false,
        bomb: bits & 64 != 0,
        restart: false,
    }
}

#[test]
fn held_fire_kills_enemy_and_shows_in_frame() {
    let mut state = GameState::new(11);
    state.spawn_cd = i32::MAX;
    state.enemies.push(parked_turret(Vec2::new(0.0, -200.0)));

    let mut stepper = FixedStepper::new(state);
    stepper.latch.press(Intent::Fire);
    for _ in 0..10 {
        assert_eq!(stepper.advance(SIM_DT), 1);
    }

    let frame = stepper.frame();
    assert!(frame.enemies.is_empty());
    assert_eq!(frame.hud.score, KILL_SCORE);
    assert!(!frame.particles.is_empty());
    assert!(frame.status_line().starts_with("Score: 25 "));
}

#[test]
fn pause_and_restart_through_latch() {
    let mut stepper = FixedStepper::new(GameState::new(5));
    stepper.advance(SIM_DT);
    stepper.latch.trigger(Action::TogglePause);
    stepper.advance(SIM_DT);
    assert_eq!(stepper.frame().banner(), Some("PAUSED"));

    let frozen = stepper.state.frame;
    stepper.advance(SIM_DT);
    assert_eq!(stepper.state.frame, frozen);

    stepper.state.score = 77;
    stepper.state.game_over();
    stepper.latch.trigger(Action::Restart);
    stepper.advance(SIM_DT);
    assert_eq!(stepper.state.phase, RunPhase::Running);
    assert_eq!(stepper.state.score, 0);
    assert_eq!(stepper.state.hiscore, 77);
}

#[test]
fn seeded_runs_are_reproducible() {
    let script: Vec<TickInput> = (0..600u32)
        .map(|i| input_from_bits((i.wrapping_mul(37) % 32) as u8 | 16))
        .collect();

    let run = |seed: u64| {
        let mut state = GameState::new(seed);
        for input in &script {
            tick(&mut state, input, SIM_DT);
        }
        (state.score, state.frame, state.player.lives, state.enemies.len())
    };

    assert_eq!(run(99), run(99));
}

proptest! {
    #[test]
    fn state_stays_within_bounds(
        seed in any::<u64>(),
        inputs in prop::collection::vec(any::<u8>(), 1..400),
    ) {
        let mut state = GameState::new(seed);
        let mut last_score = 0;

        for bits in inputs {
            tick(&mut state, &input_from_bits(bits), SIM_DT);

            let p = &state.player;
            prop_assert!((1..=MAX_POWER).contains(&p.power));
            prop_assert!(p.bombs <= MAX_BOMBS);
            prop_assert!(p.lives >= -1 && p.lives <= MAX_LIVES);
            prop_assert!(p.pos.x.abs() <= WIDTH / 2.0 - 20.0);
            prop_assert!(p.pos.y >= -HEIGHT / 2.0 + 20.0 && p.pos.y <= HEIGHT / 2.0 - 40.0);

            prop_assert!(state.enemies.len() <= MAX_ENEMIES);
            prop_assert!(state.bullets.len() <= MAX_BULLETS);
            prop_assert!(state.enemy_bullets.len() <= MAX_ENEMY_BULLETS);
            prop_assert!(state.particles.len() <= state.config.max_particles);

            prop_assert!(state.score >= last_score);
            last_score = state.score;

            if p.lives < 0 {
                prop_assert_eq!(state.phase, RunPhase::GameOver);
            }
        }
    }

    #[test]
    fn circle_hit_is_symmetric(
        ax in -500.0f32..500.0, ay in -350.0f32..350.0,
        bx in -500.0f32..500.0, by in -350.0f32..350.0,
        ar in 0.0f32..50.0, br in 0.0f32..50.0,
    ) {
        let a = Vec2::new(ax, ay);
        let b = Vec2::new(bx, by);
        prop_assert_eq!(circle_hit(a, ar, b, br), circle_hit(b, br, a, ar));
    }

    #[test]
    fn circle_touching_on_axis_counts(x in -400.0f32..400.0, r in 1.0f32..30.0) {
        let a = Vec2::new(x, 0.0);
        let b = Vec2::new(x, 2.0 * r);
        prop_assert!(circle_hit(a, r, b, r));
    }
}
