//! Per-frame simulation tick
//!
//! Order within a tick: pause handling, active crate movement and drop
//! resolution, gravity, camera follow, then the lose/win check.

use super::gravity::apply_gravity;
use super::placement::DropResult;
use super::session::GamePhase;
use super::stability::is_supported;
use super::state::{GameEvent, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Drop button currently held (level; edges are detected by the controller)
    pub drop_held: bool,
    /// Pause toggle (one-shot)
    pub pause: bool,
    /// Demo mode - the game drops crates by itself
    pub autoplay: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.pause {
        state.session.toggle_pause();
        log::info!("Phase now {:?}", state.session.phase);
    }

    if state.session.phase == GamePhase::Paused {
        return;
    }

    state.time_ticks += 1;

    if state.session.is_placing() {
        let bound = state.tuning.horizontal_bound;
        state.placement.advance(dt, bound);

        let held = if input.autoplay {
            autoplay_wants_drop(state)
        } else {
            input.drop_held
        };

        if state.placement.detect_drop(held) {
            handle_drop(state);
        }
    }

    for index in apply_gravity(&mut state.tower, &state.tuning, dt) {
        log::debug!("Crate #{} landed below the floor", index);
        state.push_event(GameEvent::CrateLanded { index });
    }

    state.camera.update();

    if let Some(outcome) = state.session.evaluate(state.tower.len()) {
        state.outcome = Some(outcome);
        state.push_event(outcome.into());
    }
}

fn handle_drop(state: &mut GameState) {
    let result =
        state
            .placement
            .resolve_drop(&mut state.tower, &state.tuning, &mut state.rng);

    match result {
        DropResult::Foundation { index } => {
            state.push_event(GameEvent::GoodPlacement { index });
        }
        DropResult::Stacked {
            index,
            camera_target,
        } => {
            state.camera.set_target(camera_target);
            state.push_event(GameEvent::GoodPlacement { index });
        }
        DropResult::Missed { index } => {
            state.session.lose_life();
            log::debug!("Missed drop, {} lives left", state.session.lives);
            state.push_event(GameEvent::BadPlacement { index });
        }
    }
}

/// Demo player: let the crate bounce once, then drop it when it sits well
/// inside the support window. The first crate goes down right away.
pub fn autoplay_wants_drop(state: &GameState) -> bool {
    let active = state.placement.active();
    match state.tower.last_stable(state.tuning.landed_crates_support) {
        None => state.tower.is_empty(),
        Some(support) => {
            state.placement.bounces() > 0
                && is_supported(
                    active.position.x,
                    support.position.x,
                    state.tuning.support_threshold * 0.5,
                )
        }
    }
}
