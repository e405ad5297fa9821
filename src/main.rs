//! Void Runner entry point
//!
//! Runs a headless demo: the autopilot plays for `demo_seconds`, restarting
//! after every game over.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{Duration, Instant};

    use void_runner::consts::TICK_MS;
    use void_runner::sim::{GameState, RunPhase, autopilot};
    use void_runner::{Action, FixedStepper, Settings};

    env_logger::init();
    log::info!("Void Runner (headless demo) starting...");

    let settings = Settings::load();
    let state = GameState::from_entropy(settings.sim_config());
    let mut stepper = FixedStepper::with_max_substeps(state, settings.max_substeps);
    let mut runs = 0u32;

    let started = Instant::now();
    let run_for = Duration::from_secs(settings.demo_seconds);
    let mut last = Instant::now();

    while started.elapsed() < run_for {
        let now = Instant::now();
        let frame_dt = (now - last).as_secs_f32();
        last = now;

        let input = autopilot::drive(&stepper.state);
        stepper.latch.follow(&input);
        stepper.advance(frame_dt);

        if stepper.state.phase == RunPhase::GameOver && !stepper.latch.peek().restart {
            runs += 1;
            let s = &stepper.state;
            log::info!(
                "Run {} finished: {} points, level {}, {} ticks",
                runs,
                s.score,
                s.difficulty.level,
                s.frame
            );
            stepper.latch.trigger(Action::Restart);
        }

        let frame = stepper.frame();
        log::trace!("{} sprites", frame.sprites(settings.quality.bright_stars()).len());

        std::thread::sleep(Duration::from_millis(TICK_MS));
    }

    let frame = stepper.frame();
    log::info!("{}", frame.status_line());
    println!(
        "Best score this session: {} ({} finished runs)",
        frame.hud.hiscore, runs
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser host; the library is embedded by the page instead
}
