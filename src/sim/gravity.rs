//! Falling crate simulation
//!
//! Falling crates drift away from the tower center, sink at a constant rate and
//! spin around their own axis until they cross the floor, where they freeze.

use super::tower::Tower;
use crate::tuning::Tuning;

/// Sideways drift direction for a crate at `x`. Dead center drifts left.
#[inline]
pub fn drift_direction(x: f32) -> f32 {
    if x > 0.0 { 1.0 } else { -1.0 }
}

/// Advance every falling crate by one tick.
///
/// Returns the indices of crates that crossed the floor this tick.
pub fn apply_gravity(tower: &mut Tower, tuning: &Tuning, dt: f32) -> Vec<usize> {
    let mut landed = Vec::new();

    for (index, c) in tower.iter_mut().enumerate() {
        if !c.is_falling {
            continue;
        }

        // Drift is per tick, not scaled by dt
        c.position.x += tuning.fall_drift * drift_direction(c.position.x);
        c.position.y -= tuning.gravity * dt;
        c.update_rotation(dt, tuning.fall_spin_rate);

        if c.position.y < tuning.floor_y {
            c.is_falling = false;
            c.landed = true;
            landed.push(index);
        }
    }

    landed
}
