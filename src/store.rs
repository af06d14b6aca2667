//! Shell State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the
//! state that outlives any single widget: navigation, appearance, the
//! pomodoro countdown and the audio transport.

use reactive_stores::Store;

use crate::audio::AudioState;
use crate::config::{KEY_ACTIVE_TAB, KEY_DARK_MODE, KEY_THEME_INDEX, THEMES};
use crate::models::Tab;
use crate::pomodoro::Countdown;
use crate::storage::{load_or, persist, persist_raw, KeyValueStore};

/// Shell state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ShellState {
    pub active_tab: Tab,
    pub dark_mode: bool,
    /// Index into `config::THEMES`
    pub theme_index: usize,
    pub show_help: bool,
    pub countdown: Countdown,
    pub audio: AudioState,
    /// Playback failure shown under the player until dismissed
    pub media_notice: Option<String>,
}

impl ShellState {
    /// Restore everything persisted from a previous session
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let theme_index: usize = load_or(store, KEY_THEME_INDEX, 0);
        Self {
            active_tab: load_active_tab(store),
            dark_mode: load_or(store, KEY_DARK_MODE, false),
            theme_index: if theme_index < THEMES.len() { theme_index } else { 0 },
            countdown: Countdown::load(store),
            audio: AudioState::load(store),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type ShellStore = Store<ShellState>;

// ========================
// Persistence Helpers
// ========================

fn load_active_tab<S: KeyValueStore + ?Sized>(store: &S) -> Tab {
    match store.read(KEY_ACTIVE_TAB) {
        Ok(Some(raw)) => Tab::parse(&raw).unwrap_or_else(|| {
            log::warn!("unknown tab {:?}, using default", raw);
            Tab::default()
        }),
        Ok(None) => Tab::default(),
        Err(e) => {
            log::warn!("read {}: {}", KEY_ACTIVE_TAB, e);
            Tab::default()
        }
    }
}

/// The tab name is stored bare, not JSON-quoted
pub fn save_active_tab<S: KeyValueStore + ?Sized>(store: &S, tab: Tab) {
    persist_raw(store, KEY_ACTIVE_TAB, tab.as_str());
}

pub fn save_dark_mode<S: KeyValueStore + ?Sized>(store: &S, dark: bool) {
    persist(store, KEY_DARK_MODE, &dark);
}

pub fn save_theme_index<S: KeyValueStore + ?Sized>(store: &S, index: usize) {
    persist(store, KEY_THEME_INDEX, &index);
}

// ========================
// Transitions
// ========================
//
// Used by `ShellContext`: each computes the next value of one field and
// writes it to `store` before handing it back.

pub fn select_tab<S: KeyValueStore + ?Sized>(store: &S, tab: Tab) -> Tab {
    save_active_tab(store, tab);
    tab
}

pub fn flip_dark_mode<S: KeyValueStore + ?Sized>(store: &S, dark: bool) -> bool {
    let dark = !dark;
    save_dark_mode(store, dark);
    dark
}

pub fn next_theme<S: KeyValueStore + ?Sized>(store: &S, index: usize) -> usize {
    let next = (index + 1) % THEMES.len();
    save_theme_index(store, next);
    next
}

pub fn step_countdown<S: KeyValueStore + ?Sized>(
    store: &S,
    mut countdown: Countdown,
    f: impl FnOnce(&mut Countdown),
) -> Countdown {
    f(&mut countdown);
    countdown.save(store);
    countdown
}

/// Apply a playlist edit; `f` returns whether the playlist changed
pub fn edit_playlist<S: KeyValueStore + ?Sized>(store: &S, audio: &mut AudioState, f: impl FnOnce(&mut AudioState) -> bool) {
    if f(audio) {
        audio.save_playlist(store);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KEY_PLAYLIST;
    use crate::models::Song;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_fresh_profile_uses_defaults() {
        let state = ShellState::load(&MemoryStorage::new());
        assert_eq!(state.active_tab, Tab::Calendar);
        assert!(!state.dark_mode);
        assert_eq!(state.theme_index, 0);
        assert_eq!(state.countdown, Countdown::default());
        assert!(state.audio.playlist.is_empty());
        assert!(!state.show_help);
    }

    #[test]
    fn test_appearance_survives_reload() {
        let store = MemoryStorage::new();
        save_active_tab(&store, Tab::PostIt);
        save_dark_mode(&store, true);
        save_theme_index(&store, 2);
        assert_eq!(store.raw(KEY_ACTIVE_TAB).as_deref(), Some("postit"));

        let state = ShellState::load(&store.clone());
        assert_eq!(state.active_tab, Tab::PostIt);
        assert!(state.dark_mode);
        assert_eq!(state.theme_index, 2);
    }

    #[test]
    fn test_shell_toggles_write_through() {
        let store = MemoryStorage::new();
        let state = ShellState::load(&store);

        let tab = select_tab(&store, Tab::Pomodoro);
        let dark = flip_dark_mode(&store, state.dark_mode);
        let theme = next_theme(&store, next_theme(&store, state.theme_index));

        let reloaded = ShellState::load(&store.clone());
        assert_eq!(reloaded.active_tab, tab);
        assert!(reloaded.dark_mode);
        assert_eq!(reloaded.dark_mode, dark);
        assert_eq!(reloaded.theme_index, 2);
        assert_eq!(reloaded.theme_index, theme);
    }

    #[test]
    fn test_theme_cycle_wraps() {
        let store = MemoryStorage::new();
        assert_eq!(next_theme(&store, THEMES.len() - 1), 0);
        assert_eq!(ShellState::load(&store).theme_index, 0);
    }

    #[test]
    fn test_countdown_steps_write_through() {
        let store = MemoryStorage::new();
        let started = step_countdown(&store, Countdown::default(), |c| c.toggle());
        let ticked = step_countdown(&store, started, |c| c.tick());
        assert_eq!(ShellState::load(&store).countdown, ticked);
        assert_eq!(ticked.display(), "24:59");

        let reset = step_countdown(&store, ticked, |c| c.reset());
        assert_eq!(ShellState::load(&store).countdown, reset);
        assert!(!ShellState::load(&store).countdown.is_running);
    }

    #[test]
    fn test_playlist_edits_write_through() {
        let store = MemoryStorage::new();
        let mut audio = AudioState::default();
        let song = |id: &str| Song {
            id: id.to_string(),
            name: id.to_string(),
            artist: "Unknown Artist".to_string(),
            url: format!("blob:{id}"),
        };

        edit_playlist(&store, &mut audio, |a| {
            a.add_songs(vec![song("a"), song("b"), song("c")]);
            true
        });
        edit_playlist(&store, &mut audio, |a| a.move_song(0, 2));

        let ids: Vec<String> = ShellState::load(&store).audio.playlist.into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);

        // Rejected move leaves storage as it was
        store.write(KEY_PLAYLIST, "[]").unwrap();
        edit_playlist(&store, &mut audio, |a| a.move_song(0, 9));
        assert_eq!(store.raw(KEY_PLAYLIST).as_deref(), Some("[]"));
    }

    #[test]
    fn test_bad_values_fall_back() {
        let store = MemoryStorage::new();
        store.write(KEY_ACTIVE_TAB, "weather").unwrap();
        store.write(KEY_THEME_INDEX, "17").unwrap();
        store.write(KEY_DARK_MODE, "maybe").unwrap();
        let state = ShellState::load(&store);
        assert_eq!(state.active_tab, Tab::Calendar);
        assert_eq!(state.theme_index, 0);
        assert!(!state.dark_mode);
    }

    #[test]
    fn test_quoted_tab_is_accepted() {
        let store = MemoryStorage::new();
        store.write(KEY_ACTIVE_TAB, "\"audio\"").unwrap();
        assert_eq!(ShellState::load(&store).active_tab, Tab::Audio);
    }

    #[test]
    fn test_playlist_restored_with_stopped_transport() {
        let store = MemoryStorage::new();
        let mut audio = AudioState::default();
        audio.add_songs(vec![Song {
            id: "abc123xyz".to_string(),
            name: "intro".to_string(),
            artist: "Unknown Artist".to_string(),
            url: "blob:1".to_string(),
        }]);
        audio.is_playing = true;
        audio.save_playlist(&store);

        let state = ShellState::load(&store);
        assert_eq!(state.audio.playlist.len(), 1);
        assert!(!state.audio.is_playing);
        assert_eq!(state.media_notice, None);
    }
}
