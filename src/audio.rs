//! Audio Transport
//!
//! Playlist and playback state owned by the shell. The media element is
//! driven from this state; its notifications feed back in through
//! `progress`, `metadata_loaded` and `track_ended`.

use crate::clock::RandomSource;
use crate::config::{KEY_PLAYLIST, UNKNOWN_ARTIST};
use crate::models::Song;
use crate::reorder::{adjust_tracked_index, move_index};
use crate::storage::{load_list, persist, KeyValueStore};

const ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 9;

#[derive(Debug, Clone, PartialEq)]
pub struct AudioState {
    pub playlist: Vec<Song>,
    pub current: usize,
    pub is_playing: bool,
    /// Seconds into the current track
    pub current_time: f64,
    /// Seconds; NaN until metadata loads
    pub duration: f64,
    /// 0.0 ..= 1.0
    pub volume: f64,
    pub muted: bool,
}

impl Default for AudioState {
    fn default() -> Self {
        Self {
            playlist: Vec::new(),
            current: 0,
            is_playing: false,
            current_time: 0.0,
            duration: 0.0,
            volume: 1.0,
            muted: false,
        }
    }
}

impl AudioState {
    /// Restore the playlist; transport state always starts stopped
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        Self {
            playlist: load_list(store, KEY_PLAYLIST),
            ..Self::default()
        }
    }

    pub fn save_playlist<S: KeyValueStore + ?Sized>(&self, store: &S) {
        persist(store, KEY_PLAYLIST, &self.playlist);
    }

    pub fn current_song(&self) -> Option<&Song> {
        self.playlist.get(self.current)
    }

    pub fn add_songs(&mut self, songs: impl IntoIterator<Item = Song>) {
        self.playlist.extend(songs);
    }

    /// Drag-and-drop reorder that keeps `current` on the same song
    pub fn move_song(&mut self, from: usize, to: usize) -> bool {
        if !move_index(&mut self.playlist, from, to) {
            return false;
        }
        self.current = adjust_tracked_index(self.current, from, to);
        true
    }

    pub fn toggle_play(&mut self) {
        if self.playlist.is_empty() {
            self.is_playing = false;
            return;
        }
        self.is_playing = !self.is_playing;
    }

    /// Row click: a new track starts playing, the current one toggles
    pub fn select(&mut self, index: usize) {
        if index >= self.playlist.len() {
            return;
        }
        if index == self.current {
            self.toggle_play();
        } else {
            self.jump_to(index);
            self.is_playing = true;
        }
    }

    /// Next track; no-op on the last one
    pub fn play_next(&mut self) -> bool {
        if self.current + 1 >= self.playlist.len() {
            return false;
        }
        self.jump_to(self.current + 1);
        self.is_playing = true;
        true
    }

    /// Previous track; no-op on the first one
    pub fn play_previous(&mut self) -> bool {
        if self.current == 0 || self.playlist.is_empty() {
            return false;
        }
        self.jump_to(self.current - 1);
        self.is_playing = true;
        true
    }

    /// Auto-advance, or stop after the last track
    pub fn track_ended(&mut self) {
        if !self.play_next() {
            self.is_playing = false;
        }
    }

    /// Clamped seek target in seconds
    pub fn seek(&mut self, time: f64) -> f64 {
        let mut time = time.max(0.0);
        if self.duration.is_finite() && self.duration > 0.0 {
            time = time.min(self.duration);
        }
        self.current_time = time;
        time
    }

    /// Volume 0 mutes, anything else unmutes
    pub fn set_volume(&mut self, volume: f64) {
        let volume = if volume.is_finite() { volume.clamp(0.0, 1.0) } else { 1.0 };
        self.volume = volume;
        self.muted = volume == 0.0;
    }

    /// Mute drops the volume to 0, unmute restores full volume
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        self.volume = if self.muted { 0.0 } else { 1.0 };
    }

    /// `timeupdate` from the media element
    pub fn progress(&mut self, current_time: f64, duration: f64) {
        self.current_time = current_time;
        self.duration = duration;
    }

    /// `loadedmetadata` from the media element
    pub fn metadata_loaded(&mut self, duration: f64) {
        self.duration = duration;
    }

    fn jump_to(&mut self, index: usize) {
        self.current = index;
        self.current_time = 0.0;
    }
}

/// Display name for an uploaded file: the name without its extension
pub fn song_name(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => file_name.to_string(),
    }
}

/// Nine random base-36 characters
pub fn random_id(rng: &mut impl RandomSource) -> String {
    (0..ID_LEN)
        .map(|_| ID_ALPHABET[rng.below(ID_ALPHABET.len() as u32) as usize] as char)
        .collect()
}

pub fn new_song(file_name: &str, url: String, rng: &mut impl RandomSource) -> Song {
    Song {
        id: random_id(rng),
        name: song_name(file_name),
        artist: UNKNOWN_ARTIST.to_string(),
        url,
    }
}

/// `m:ss`; unknown durations show as 0:00
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 { seconds.floor() as u64 } else { 0 };
    format!("{}:{:02}", total / 60, total % 60)
}
