//! Shell Context
//!
//! `ShellContext` is the one handle widgets get to shell-owned state. It is
//! passed down as a prop; every method that changes state also writes the
//! affected storage keys before returning.

use leptos::html;
use leptos::prelude::*;

use crate::models::{Song, Tab};
use crate::pomodoro::Countdown;
use crate::storage::BrowserStorage;
use crate::store::{edit_playlist, flip_dark_mode, next_theme, select_tab, step_countdown, ShellStateStoreFields, ShellStore};

#[derive(Clone, Copy)]
pub struct ShellContext {
    pub state: ShellStore,
    pub storage: BrowserStorage,
    /// The page's single `<audio>` element
    pub media: NodeRef<html::Audio>,
}

impl ShellContext {
    pub fn new(state: ShellStore, storage: BrowserStorage) -> Self {
        Self { state, storage, media: NodeRef::new() }
    }

    // ========================
    // Shell
    // ========================

    pub fn set_active_tab(&self, tab: Tab) {
        self.state.active_tab().set(select_tab(&self.storage, tab));
    }

    pub fn toggle_dark_mode(&self) {
        let dark = flip_dark_mode(&self.storage, self.state.dark_mode().get_untracked());
        self.state.dark_mode().set(dark);
    }

    pub fn cycle_theme(&self) {
        let next = next_theme(&self.storage, self.state.theme_index().get_untracked());
        self.state.theme_index().set(next);
    }

    pub fn toggle_help(&self) {
        self.state.show_help().update(|open| *open = !*open);
    }

    // ========================
    // Pomodoro
    // ========================

    pub fn toggle_timer(&self) {
        self.update_countdown(|countdown| countdown.toggle());
    }

    pub fn reset_timer(&self) {
        self.update_countdown(|countdown| countdown.reset());
    }

    /// One-second tick from the shell's interval
    pub fn tick(&self) {
        self.update_countdown(|countdown| countdown.tick());
    }

    fn update_countdown(&self, f: impl FnOnce(&mut Countdown)) {
        let countdown = step_countdown(&self.storage, self.state.countdown().get_untracked(), f);
        self.state.countdown().set(countdown);
    }

    // ========================
    // Audio
    // ========================

    pub fn toggle_play(&self) {
        self.state.audio().update(|audio| audio.toggle_play());
    }

    pub fn play_next(&self) {
        self.state.audio().update(|audio| {
            audio.play_next();
        });
    }

    pub fn play_previous(&self) {
        self.state.audio().update(|audio| {
            audio.play_previous();
        });
    }

    pub fn select_track(&self, index: usize) {
        self.state.audio().update(|audio| audio.select(index));
    }

    /// Seek the media element and mirror the position
    pub fn seek(&self, time: f64) {
        let mut target = time;
        self.state.audio().update(|audio| target = audio.seek(time));
        if let Some(element) = self.media.get_untracked() {
            element.set_current_time(target);
        }
    }

    pub fn set_volume(&self, volume: f64) {
        self.state.audio().update(|audio| audio.set_volume(volume));
    }

    pub fn toggle_mute(&self) {
        self.state.audio().update(|audio| audio.toggle_mute());
    }

    pub fn add_songs(&self, songs: Vec<Song>) {
        if songs.is_empty() {
            return;
        }
        log::info!("adding {} songs", songs.len());
        self.state.audio().update(|audio| {
            edit_playlist(&self.storage, audio, |audio| {
                audio.add_songs(songs);
                true
            });
        });
    }

    pub fn move_song(&self, from: usize, to: usize) {
        self.state.audio().update(|audio| {
            edit_playlist(&self.storage, audio, |audio| audio.move_song(from, to));
        });
    }

    pub fn track_ended(&self) {
        self.state.audio().update(|audio| audio.track_ended());
    }

    pub fn media_progress(&self, current_time: f64, duration: f64) {
        self.state.audio().update(|audio| audio.progress(current_time, duration));
    }

    pub fn metadata_loaded(&self, duration: f64) {
        self.state.audio().update(|audio| audio.metadata_loaded(duration));
    }

    /// A `play()` call was rejected by the browser
    pub fn playback_failed(&self, reason: String) {
        log::warn!("playback failed: {}", reason);
        self.state.audio().update(|audio| audio.is_playing = false);
        self.state.media_notice().set(Some(reason));
    }

    pub fn dismiss_notice(&self) {
        self.state.media_notice().set(None);
    }
}
