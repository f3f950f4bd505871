//! Placement controller
//!
//! Owns the active crate sliding back and forth above the tower, turns the
//! drop button into a single drop per press, and resolves each drop into a
//! stacked or falling crate.

use glam::Vec3;
use rand::Rng;

use super::entity::Crate;
use super::stability::is_supported;
use super::tower::Tower;
use crate::tuning::Tuning;

/// How a drop was resolved
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropResult {
    /// First crate of the tower, accepted without a support check
    Foundation { index: usize },
    /// Landed on the support crate; the camera should follow
    Stacked { index: usize, camera_target: Vec3 },
    /// Missed the support crate and is now falling
    Missed { index: usize },
}

#[derive(Debug, Clone)]
pub struct PlacementController {
    active: Crate,
    /// +1 moving right, -1 moving left. Carries over between crates.
    direction: f32,
    move_speed: f32,
    drop_was_held: bool,
    /// Bound hits since the active crate spawned
    bounces: u32,
}

impl PlacementController {
    pub fn new(tuning: &Tuning, rng: &mut impl Rng) -> Self {
        Self {
            active: Crate::spawn(tuning.spawn_position, rng),
            direction: 1.0,
            move_speed: tuning.base_move_speed,
            drop_was_held: false,
            bounces: 0,
        }
    }

    pub fn active(&self) -> &Crate {
        &self.active
    }

    #[cfg(test)]
    pub(crate) fn active_mut(&mut self) -> &mut Crate {
        &mut self.active
    }

    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    pub fn direction(&self) -> f32 {
        self.direction
    }

    pub fn bounces(&self) -> u32 {
        self.bounces
    }

    /// Slide the active crate, bouncing off ±`bound`
    pub fn advance(&mut self, dt: f32, bound: f32) {
        let pos = &mut self.active.position;
        pos.x += self.move_speed * self.direction * dt;

        if pos.x.abs() >= bound {
            self.direction = -self.direction;
            pos.x = pos.x.clamp(-bound, bound);
            self.bounces += 1;
        }
    }

    /// Rising edge of the drop button. Holding it down drops only once.
    pub fn detect_drop(&mut self, held: bool) -> bool {
        let pressed = held && !self.drop_was_held;
        self.drop_was_held = held;
        pressed
    }

    /// Judge the active crate against the tower, append it, and spawn the next one
    pub fn resolve_drop(
        &mut self,
        tower: &mut Tower,
        tuning: &Tuning,
        rng: &mut impl Rng,
    ) -> DropResult {
        let pos = self.active.position;
        let above = Vec3::new(pos.x, pos.y + tuning.stack_step, 0.0);

        enum Verdict {
            Foundation,
            Stacked,
            Missed,
        }

        let verdict = if tower.is_empty() {
            Verdict::Foundation
        } else {
            match tower.last_stable(tuning.landed_crates_support) {
                Some(support) if is_supported(pos.x, support.position.x, tuning.support_threshold) => {
                    Verdict::Stacked
                }
                _ => Verdict::Missed,
            }
        };

        // A miss respawns at the same height, anything else one step up
        let next_position = match verdict {
            Verdict::Missed => pos,
            Verdict::Foundation | Verdict::Stacked => above,
        };

        let mut dropped = std::mem::replace(&mut self.active, Crate::spawn(next_position, rng));
        self.bounces = 0;
        dropped.is_falling = matches!(verdict, Verdict::Missed);
        let index = tower.push(dropped);

        let result = match verdict {
            Verdict::Foundation => DropResult::Foundation { index },
            Verdict::Stacked => {
                self.move_speed += tuning.speed_increment;
                DropResult::Stacked {
                    index,
                    camera_target: Vec3::new(0.0, above.y, 0.0),
                }
            }
            Verdict::Missed => DropResult::Missed { index },
        };

        log::debug!(
            "Drop #{} at x={:.3}: {:?}, speed now {:.2}",
            index,
            pos.x,
            result,
            self.move_speed
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn setup() -> (PlacementController, Tower, Tuning, Pcg32) {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let controller = PlacementController::new(&tuning, &mut rng);
        (controller, Tower::new(), tuning, rng)
    }

    #[test]
    fn test_advance_and_bounce() {
        let (mut pc, _, tuning, _) = setup();
        pc.advance(0.5, tuning.horizontal_bound);
        assert!((pc.active().position.x - 2.5).abs() < 1e-6);
        assert_eq!(pc.direction(), 1.0);

        pc.advance(1.0, tuning.horizontal_bound);
        assert_eq!(pc.active().position.x, 5.0);
        assert_eq!(pc.direction(), -1.0);
        assert_eq!(pc.bounces(), 1);

        pc.advance(0.2, tuning.horizontal_bound);
        assert!((pc.active().position.x - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_bounce_on_negative_bound() {
        let (mut pc, _, _, _) = setup();
        pc.direction = -1.0;
        pc.advance(3.0, 5.0);
        assert_eq!(pc.active().position.x, -5.0);
        assert_eq!(pc.direction(), 1.0);
    }

    #[test]
    fn test_edge_detection() {
        let (mut pc, _, _, _) = setup();
        assert!(!pc.detect_drop(false));
        assert!(pc.detect_drop(true));
        assert!(!pc.detect_drop(true));
        assert!(!pc.detect_drop(true));
        assert!(!pc.detect_drop(false));
        assert!(pc.detect_drop(true));
    }

    #[test]
    fn test_first_drop_is_foundation_anywhere() {
        let (mut pc, mut tower, tuning, mut rng) = setup();
        pc.active.position.x = 4.9;

        let result = pc.resolve_drop(&mut tower, &tuning, &mut rng);
        assert_eq!(result, DropResult::Foundation { index: 0 });
        assert!(!tower.get(0).unwrap().is_falling);
        assert_eq!(pc.move_speed(), tuning.base_move_speed);
        assert_eq!(pc.active().position, Vec3::new(4.9, 4.0, 0.0));
    }

    #[test]
    fn test_supported_drop_stacks() {
        let (mut pc, mut tower, tuning, mut rng) = setup();
        pc.active.position.x = 0.0;
        pc.resolve_drop(&mut tower, &tuning, &mut rng);

        pc.active.position.x = 0.5;
        let result = pc.resolve_drop(&mut tower, &tuning, &mut rng);

        assert_eq!(
            result,
            DropResult::Stacked {
                index: 1,
                camera_target: Vec3::new(0.0, 6.0, 0.0),
            }
        );
        assert!(!tower.get(1).unwrap().is_falling);
        assert!((pc.move_speed() - (tuning.base_move_speed + 0.3)).abs() < 1e-6);
        assert_eq!(pc.active().position, Vec3::new(0.5, 6.0, 0.0));
    }

    #[test]
    fn test_unsupported_drop_falls() {
        let (mut pc, mut tower, tuning, mut rng) = setup();
        pc.active.position.x = 0.0;
        pc.resolve_drop(&mut tower, &tuning, &mut rng);

        pc.active.position.x = 1.0;
        let result = pc.resolve_drop(&mut tower, &tuning, &mut rng);

        assert_eq!(result, DropResult::Missed { index: 1 });
        assert!(tower.get(1).unwrap().is_falling);
        assert_eq!(pc.move_speed(), tuning.base_move_speed);
        // Next crate waits at the height of the miss
        assert_eq!(pc.active().position, Vec3::new(1.0, 4.0, 0.0));
    }

    #[test]
    fn test_support_ignores_falling_crates() {
        let (mut pc, mut tower, tuning, mut rng) = setup();
        pc.active.position.x = 0.0;
        pc.resolve_drop(&mut tower, &tuning, &mut rng);
        pc.active.position.x = 2.0;
        pc.resolve_drop(&mut tower, &tuning, &mut rng);

        // Judged against the crate at x=0, not the falling one at x=2
        pc.active.position.x = 0.3;
        let result = pc.resolve_drop(&mut tower, &tuning, &mut rng);
        assert!(matches!(result, DropResult::Stacked { index: 2, .. }));
    }

    #[test]
    fn test_threshold_boundary_misses() {
        let (mut pc, mut tower, tuning, mut rng) = setup();
        pc.active.position.x = 0.0;
        pc.resolve_drop(&mut tower, &tuning, &mut rng);

        pc.active.position.x = tuning.support_threshold;
        let result = pc.resolve_drop(&mut tower, &tuning, &mut rng);
        assert!(matches!(result, DropResult::Missed { .. }));
    }

    proptest! {
        #[test]
        fn speed_only_grows_on_stacked_drops(xs in proptest::collection::vec(-5.0f32..5.0, 1..40)) {
            let (mut pc, mut tower, tuning, mut rng) = setup();
            for x in xs {
                let before = pc.move_speed();
                pc.active.position.x = x;
                let result = pc.resolve_drop(&mut tower, &tuning, &mut rng);
                match result {
                    DropResult::Stacked { .. } => {
                        prop_assert!((pc.move_speed() - before - tuning.speed_increment).abs() < 1e-4);
                    }
                    _ => prop_assert_eq!(pc.move_speed(), before),
                }
            }
        }
    }
}
