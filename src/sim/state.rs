//! Game state and simulation events
//!
//! Everything a tick mutates lives in [`GameState`]; the tick driver owns it
//! exclusively.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::FollowCamera;
use super::entity::Platform;
use super::placement::PlacementController;
use super::session::{Outcome, Session};
use super::tower::Tower;
use crate::tuning::Tuning;

/// Default aspect ratio until the renderer reports its surface size
pub const DEFAULT_ASPECT_RATIO: f32 = 16.0 / 9.0;

/// Things collaborators react to (audio, screens, effects)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A drop was accepted as stable support
    GoodPlacement { index: usize },
    /// A drop missed and the crate is falling
    BadPlacement { index: usize },
    /// A falling crate crossed the floor and froze
    CrateLanded { index: usize },
    /// Out of lives
    Lost { placed: usize },
    /// Tower reached the goal
    Won,
}

impl From<Outcome> for GameEvent {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Lost { placed } => GameEvent::Lost { placed },
            Outcome::Won => GameEvent::Won,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    /// Source of per-crate rotation axes
    pub rng: Pcg32,
    pub tower: Tower,
    pub placement: PlacementController,
    pub session: Session,
    pub camera: FollowCamera,
    pub platform: Platform,
    /// Simulation tick counter (paused ticks excluded)
    pub time_ticks: u64,
    /// Terminal result once reached
    pub outcome: Option<Outcome>,
    /// Events produced since the last drain
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let placement = PlacementController::new(&tuning, &mut rng);

        log::info!(
            "New session (seed {}, {} lives, goal {} crates)",
            seed,
            tuning.starting_lives,
            tuning.max_crates
        );

        Self {
            seed,
            rng,
            tower: Tower::new(),
            placement,
            session: Session::new(&tuning),
            camera: FollowCamera::from_tuning(&tuning, DEFAULT_ASPECT_RATIO),
            platform: Platform::new(tuning.horizontal_bound),
            time_ticks: 0,
            outcome: None,
            events: Vec::new(),
            tuning,
        }
    }

    /// Number of crates in the tower, falling ones included
    pub fn placed_count(&self) -> usize {
        self.tower.len()
    }

    pub fn lives(&self) -> u32 {
        self.session.lives
    }

    pub fn background_color(&self) -> [f32; 4] {
        self.session.background_color(self.placed_count())
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events recorded since the previous call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;
    use glam::Vec3;

    #[test]
    fn test_new_session() {
        let state = GameState::new(42);
        assert_eq!(state.lives(), 3);
        assert_eq!(state.placed_count(), 0);
        assert_eq!(state.session.phase, GamePhase::Active);
        assert_eq!(state.placement.active().position, Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(state.camera.target(), Vec3::new(0.0, 1.0, 0.0));
        assert!(state.outcome.is_none());
    }

    #[test]
    fn test_same_seed_same_axes() {
        let a = GameState::new(5);
        let b = GameState::new(5);
        let c = GameState::new(6);
        assert_eq!(a.placement.active().rotation_axis(), b.placement.active().rotation_axis());
        assert_ne!(a.placement.active().rotation_axis(), c.placement.active().rotation_axis());
    }
}
