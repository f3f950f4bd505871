//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Append-only crate storage, stable indices
//! - No rendering, audio or platform dependencies

pub mod camera;
pub mod entity;
pub mod gravity;
pub mod placement;
pub mod session;
pub mod stability;
pub mod state;
pub mod tick;
pub mod tower;

pub use camera::{Camera, FollowCamera};
pub use entity::{Crate, Platform};
pub use gravity::{apply_gravity, drift_direction};
pub use placement::{DropResult, PlacementController};
pub use session::{GamePhase, Outcome, Session, background_color};
pub use stability::is_supported;
pub use state::{GameEvent, GameState};
pub use tick::{TickInput, autoplay_wants_drop, tick};
pub use tower::Tower;
