//! Audio cue dispatch
//!
//! The game has two fire-and-forget sound effects. [`AudioManager`] turns
//! simulation events into cues at the player's volume and queues them for
//! whatever playback backend the platform provides.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Crate landed on the tower
    GoodPlace,
    /// Crate missed and is falling
    BadPlace,
}

impl SoundEffect {
    /// Asset name of the sample backing this effect
    pub fn asset_name(&self) -> &'static str {
        match self {
            SoundEffect::GoodPlace => "Success",
            SoundEffect::BadPlace => "Bad",
        }
    }

    /// Map a simulation event to its cue, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::GoodPlacement { .. } => Some(SoundEffect::GoodPlace),
            GameEvent::BadPlacement { .. } => Some(SoundEffect::BadPlace),
            _ => None,
        }
    }
}

/// A cue ready for playback
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cue {
    pub effect: SoundEffect,
    pub volume: f32,
}

/// Audio manager for the game
#[derive(Debug, Default)]
pub struct AudioManager {
    sfx_volume: f32,
    muted: bool,
    pending: Vec<Cue>,
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        let mut audio = Self::default();
        audio.apply_settings(settings);
        audio
    }

    /// Pick up volume changes from the options menu
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.sfx_volume = settings.effective_sfx_volume();
    }

    /// Temporary mute (e.g. window lost focus), independent of settings
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.sfx_volume }
    }

    /// Queue a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let volume = self.effective_volume();
        if volume <= 0.0 {
            return;
        }
        log::debug!("Cue {:?} at volume {:.2}", effect, volume);
        self.pending.push(Cue { effect, volume });
    }

    /// Queue the cues for a batch of simulation events, in order
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }

    /// Hand queued cues to the playback backend
    pub fn drain(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_map_to_cues_once() {
        let mut audio = AudioManager::new(&Settings::default());
        audio.handle_events(&[
            GameEvent::GoodPlacement { index: 0 },
            GameEvent::CrateLanded { index: 0 },
            GameEvent::BadPlacement { index: 1 },
        ]);

        let cues = audio.drain();
        assert_eq!(cues.len(), 2);
        assert_eq!(cues[0].effect, SoundEffect::GoodPlace);
        assert_eq!(cues[1].effect, SoundEffect::BadPlace);
        assert!(audio.drain().is_empty());
    }

    #[test]
    fn test_volume_follows_settings() {
        let settings = Settings {
            sfx_volume: 0.3,
            ..Default::default()
        };
        let mut audio = AudioManager::new(&settings);
        audio.play(SoundEffect::GoodPlace);
        assert_eq!(audio.drain()[0].volume, 0.3);
    }

    #[test]
    fn test_muted_drops_cues() {
        let mut audio = AudioManager::new(&Settings::default());
        audio.set_muted(true);
        audio.play(SoundEffect::BadPlace);
        assert!(audio.drain().is_empty());
    }
}
