use game_core::{GameEvent, SoundCue};
use macroquad::audio::play_sound_once;

use crate::assets::Assets;

/// Cues to fire for a batch of events, in event order
pub fn cues_for(events: &[GameEvent]) -> Vec<SoundCue> {
    events.iter().filter_map(|e| e.sound_cue()).collect()
}

/// Fire-and-forget playback of every cue the events ask for
pub fn play_cues(assets: &Assets, events: &[GameEvent]) {
    for cue in cues_for(events) {
        match assets.sound(cue) {
            Some(sound) => play_sound_once(sound),
            None => log::trace!("No sound for {}", cue.name()),
        }
    }
}
