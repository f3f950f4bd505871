//! Drop-time support check

/// A dropped crate is supported when its X offset from the support crate is
/// strictly below `threshold`. An offset exactly equal to the threshold misses.
#[inline]
pub fn is_supported(active_x: f32, support_x: f32, threshold: f32) -> bool {
    (active_x - support_x).abs() < threshold
}
