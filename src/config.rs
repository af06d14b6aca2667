//! Compile-time configuration
//!
//! Storage keys, defaults and palettes shared by the shell and widgets.

use log::LevelFilter;

// ========================
// Storage Keys
// ========================

pub const KEY_ACTIVE_TAB: &str = "activeTab";
pub const KEY_DARK_MODE: &str = "darkMode";
pub const KEY_THEME_INDEX: &str = "themeIndex";
pub const KEY_POMODORO_MINUTES: &str = "pomodoroMinutes";
pub const KEY_POMODORO_SECONDS: &str = "pomodoroSeconds";
pub const KEY_POMODORO_ACTIVE: &str = "pomodoroIsActive";
pub const KEY_PLAYLIST: &str = "audioPlayerPlaylist";
pub const KEY_CALENDAR_EVENTS: &str = "calendarEvents";
pub const KEY_TODOS: &str = "todos";
pub const KEY_POST_IT_NOTES: &str = "postItNotes";

// ========================
// Defaults
// ========================

/// Length of a fresh pomodoro session
pub const POMODORO_MINUTES: u32 = 25;

/// Artist shown for songs loaded from local files
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

#[cfg(debug_assertions)]
pub const LOG_LEVEL: LevelFilter = LevelFilter::Debug;
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ========================
// Palettes
// ========================

/// Header colour scheme, selected by the theme toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    /// CSS class applied to the app shell
    pub class: &'static str,
}

pub const THEMES: [Theme; 4] = [
    Theme { name: "Purple", class: "theme-purple" },
    Theme { name: "Blue", class: "theme-blue" },
    Theme { name: "Green", class: "theme-green" },
    Theme { name: "Red", class: "theme-red" },
];

/// Theme for a stored index, falling back to the first one
pub fn theme(index: usize) -> Theme {
    THEMES.get(index).copied().unwrap_or(THEMES[0])
}

/// Emoji offered by the todo picker
pub const EMOJI_PALETTE: [&str; 8] = ["😀", "😎", "🚀", "💡", "🎉", "📚", "💪", "🏆"];

/// Calculator keypad, row-major
pub const CALCULATOR_KEYS: [&str; 16] = [
    "7", "8", "9", "/",
    "4", "5", "6", "*",
    "1", "2", "3", "-",
    "0", ".", "=", "+",
];
