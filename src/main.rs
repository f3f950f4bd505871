//! Crate Stack entry point
//!
//! Runs a headless demo session: the autoplayer stacks crates on the fixed
//! timestep loop while events are routed to audio and logged.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate_stack::Tuning;
use crate_stack::audio::AudioManager;
use crate_stack::consts::*;
use crate_stack::renderer::FrameSnapshot;
use crate_stack::settings::Settings;
use crate_stack::sim::{GameEvent, GameState, Outcome, TickInput, tick};

const SETTINGS_PATH: &str = "crate_stack_settings.json";
/// Give up on the demo after ten simulated minutes
const MAX_FRAMES: u32 = 60 * 60 * 10;

#[derive(Parser, Debug)]
#[command(version, about = "Headless Crate Stack demo with the autoplayer")]
struct Args {
    /// Seed for crate rotation axes (defaults to the system clock)
    seed: Option<u64>,

    /// JSON tuning document overriding the default balance
    tuning: Option<PathBuf>,

    /// Player settings file
    #[arg(long, default_value = SETTINGS_PATH)]
    settings: PathBuf,

    /// Stop after this many frames without an outcome
    #[arg(long, default_value_t = MAX_FRAMES)]
    max_frames: u32,
}

/// Game instance holding all state
struct Game {
    state: GameState,
    audio: AudioManager,
    accumulator: f32,
    input: TickInput,
    good: u32,
    bad: u32,
}

impl Game {
    fn new(seed: u64, tuning: Tuning, settings: &Settings) -> Self {
        Self {
            state: GameState::with_tuning(seed, tuning),
            audio: AudioManager::new(settings),
            accumulator: 0.0,
            input: TickInput {
                autoplay: true,
                ..Default::default()
            },
            good: 0,
            bad: 0,
        }
    }

    /// Run simulation ticks for one rendered frame
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.pause = false;
        }

        let events = self.state.drain_events();
        self.audio.handle_events(&events);
        for event in &events {
            match event {
                GameEvent::GoodPlacement { .. } => self.good += 1,
                GameEvent::BadPlacement { .. } => self.bad += 1,
                _ => {}
            }
        }

        // No playback backend in the headless build
        for cue in self.audio.drain() {
            log::trace!("{} @ {:.2}", cue.effect.asset_name(), cue.volume);
        }
    }
}

fn default_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(default_seed);
    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => Tuning::default(),
    };
    let settings = Settings::load(&args.settings).unwrap_or_else(|e| {
        log::warn!("Ignoring settings file: {}", e);
        Settings::default()
    });

    log::info!("Crate Stack (native demo) starting...");
    let mut game = Game::new(seed, tuning, &settings);

    let mut frames = 0;
    while game.state.outcome.is_none() && frames < args.max_frames {
        game.update(SIM_DT);
        frames += 1;

        if frames % 600 == 0 {
            let frame = FrameSnapshot::capture(&game.state);
            log::info!(
                "t={}s tower={} lives={} speed={:.1} background={:?}",
                frames / 60,
                game.state.placed_count(),
                game.state.lives(),
                game.state.placement.move_speed(),
                frame.clear_color
            );
        }
    }

    match game.state.outcome {
        Some(Outcome::Won) => log::info!("You win! Stacked {} crates", game.state.placed_count()),
        Some(Outcome::Lost { placed }) => log::info!("Game over with {} crates", placed),
        None => log::warn!("Demo stopped after {} frames without an outcome", frames),
    }
    log::info!("Placements: {} good, {} bad", game.good, game.bad);
    log::info!("Replay this run with seed {}", game.state.seed);

    Ok(())
}
