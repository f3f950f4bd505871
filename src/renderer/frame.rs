//! Frame snapshot
//!
//! Gathers everything a renderer needs for one frame from the game state.

use super::instance::{CameraUniform, CrateInstance};
use crate::sim::GameState;

#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    pub clear_color: [f32; 4],
    pub camera: CameraUniform,
    pub platform: CrateInstance,
    /// Tower crates in drop order, then the active crate
    pub crates: Vec<CrateInstance>,
}

impl FrameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let mut crates = Vec::with_capacity(state.tower.len() + 1);
        crates.extend(state.tower.iter().map(CrateInstance::from_crate));
        crates.push(CrateInstance::from_crate(state.placement.active()));

        Self {
            clear_color: state.background_color(),
            camera: CameraUniform::new(&state.camera, state.camera.position()),
            platform: CrateInstance::new(state.platform.world_matrix(), false),
            crates,
        }
    }

    /// Raw bytes for the instance buffer
    pub fn instance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.crates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::session::GROUND_COLOR;
    use crate::sim::{TickInput, tick};

    #[test]
    fn test_capture_fresh_session() {
        let state = GameState::new(3);
        let frame = FrameSnapshot::capture(&state);

        assert_eq!(frame.crates.len(), 1);
        assert_eq!(frame.clear_color, GROUND_COLOR);
        assert_eq!(frame.instance_bytes().len(), 80);
    }

    #[test]
    fn test_capture_includes_tower_and_active() {
        let mut state = GameState::new(3);
        let press = TickInput {
            drop_held: true,
            ..Default::default()
        };
        tick(&mut state, &press, 0.0);

        let frame = FrameSnapshot::capture(&state);
        assert_eq!(frame.crates.len(), 2);
        assert_eq!(
            frame.crates[1].model_matrix(),
            state.placement.active().world_matrix()
        );
    }
}
