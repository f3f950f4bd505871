//! Append-only crate store
//!
//! Insertion order is drop order, not height order: a missed crate is appended
//! too so it can animate its fall. Indices handed out by [`Tower::push`] stay
//! valid for the whole session.

use serde::{Deserialize, Serialize};

use super::entity::Crate;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tower {
    crates: Vec<Crate>,
}

impl Tower {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a resolved crate, returning its stable index
    pub fn push(&mut self, entry: Crate) -> usize {
        self.crates.push(entry);
        self.crates.len() - 1
    }

    pub fn len(&self) -> usize {
        self.crates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crates.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Crate> {
        self.crates.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Crate> {
        self.crates.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Crate> {
        self.crates.iter_mut()
    }

    /// Index of the crate nearest the end that may act as support.
    ///
    /// Returns `None` for an empty tower or one where every crate is falling.
    pub fn last_stable_index(&self, landed_crates_support: bool) -> Option<usize> {
        self.crates
            .iter()
            .rposition(|c| c.can_support(landed_crates_support))
    }

    pub fn last_stable(&self, landed_crates_support: bool) -> Option<&Crate> {
        self.last_stable_index(landed_crates_support)
            .map(|i| &self.crates[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn crate_at(x: f32, falling: bool) -> Crate {
        let mut c = Crate::new(Vec3::new(x, 0.0, 0.0), Vec3::Y);
        c.is_falling = falling;
        c
    }

    #[test]
    fn test_empty_tower_has_no_support() {
        let tower = Tower::new();
        assert!(tower.last_stable(true).is_none());
    }

    #[test]
    fn test_all_falling_has_no_support() {
        let mut tower = Tower::new();
        tower.push(crate_at(0.0, true));
        tower.push(crate_at(1.0, true));
        assert!(tower.last_stable_index(true).is_none());
        assert!(tower.iter().all(|c| c.is_falling));
    }

    #[test]
    fn test_last_stable_skips_trailing_falling() {
        let mut tower = Tower::new();
        tower.push(crate_at(0.0, false));
        tower.push(crate_at(0.3, false));
        tower.push(crate_at(2.0, true));

        assert_eq!(tower.last_stable_index(true), Some(1));
        assert_eq!(tower.last_stable(true).map(|c| c.position.x), Some(0.3));
    }

    #[test]
    fn test_landed_crate_support_flag() {
        let mut tower = Tower::new();
        tower.push(crate_at(0.0, false));
        let mut landed = crate_at(8.0, false);
        landed.landed = true;
        tower.push(landed);

        assert_eq!(tower.last_stable_index(true), Some(1));
        assert_eq!(tower.last_stable_index(false), Some(0));
    }
}
