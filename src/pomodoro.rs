//! Pomodoro Countdown
//!
//! One-second tick state machine owned by the shell.

use crate::config::{KEY_POMODORO_ACTIVE, KEY_POMODORO_MINUTES, KEY_POMODORO_SECONDS, POMODORO_MINUTES};
use crate::storage::{load_or, persist, KeyValueStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub minutes: u32,
    pub seconds: u32,
    pub is_running: bool,
}

impl Default for Countdown {
    fn default() -> Self {
        Self {
            minutes: POMODORO_MINUTES,
            seconds: 0,
            is_running: false,
        }
    }
}

impl Countdown {
    pub fn is_finished(&self) -> bool {
        self.minutes == 0 && self.seconds == 0
    }

    /// Advance one second. At 00:00 the countdown stops instead.
    pub fn tick(&mut self) {
        if !self.is_running {
            return;
        }
        if self.seconds > 0 {
            self.seconds -= 1;
        } else if self.minutes > 0 {
            self.minutes -= 1;
            self.seconds = 59;
        } else {
            self.is_running = false;
        }
    }

    /// Start/pause
    pub fn toggle(&mut self) {
        if !self.is_running && self.is_finished() {
            return;
        }
        self.is_running = !self.is_running;
    }

    /// Back to a stopped full session
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// `MM:SS`
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.minutes, self.seconds)
    }

    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let defaults = Self::default();
        Self {
            minutes: load_or(store, KEY_POMODORO_MINUTES, defaults.minutes),
            seconds: load_or(store, KEY_POMODORO_SECONDS, defaults.seconds).min(59),
            is_running: load_or(store, KEY_POMODORO_ACTIVE, defaults.is_running),
        }
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &S) {
        persist(store, KEY_POMODORO_MINUTES, &self.minutes);
        persist(store, KEY_POMODORO_SECONDS, &self.seconds);
        persist(store, KEY_POMODORO_ACTIVE, &self.is_running);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_runs_down_and_stops_at_zero() {
        let mut countdown = Countdown { minutes: 0, seconds: 5, is_running: true };
        for _ in 0..6 {
            countdown.tick();
        }
        assert_eq!(countdown, Countdown { minutes: 0, seconds: 0, is_running: false });
        countdown.tick();
        assert_eq!(countdown.display(), "00:00");
    }

    #[test]
    fn test_minute_rollover() {
        let mut countdown = Countdown { minutes: 2, seconds: 0, is_running: true };
        countdown.tick();
        assert_eq!(countdown.display(), "01:59");
    }

    #[test]
    fn test_paused_countdown_does_not_tick() {
        let mut countdown = Countdown::default();
        countdown.tick();
        assert_eq!(countdown.display(), "25:00");
        countdown.toggle();
        countdown.tick();
        assert_eq!(countdown.display(), "24:59");
        countdown.toggle();
        countdown.tick();
        assert_eq!(countdown.display(), "24:59");
    }

    #[test]
    fn test_reset_stops_at_full_session() {
        let mut countdown = Countdown { minutes: 3, seconds: 12, is_running: true };
        countdown.reset();
        assert_eq!(countdown, Countdown::default());
        assert!(!countdown.is_running);
    }

    #[test]
    fn test_finished_countdown_cannot_start() {
        let mut countdown = Countdown { minutes: 0, seconds: 0, is_running: false };
        countdown.toggle();
        assert!(!countdown.is_running);
    }

    #[test]
    fn test_state_survives_reload() {
        let store = MemoryStorage::new();
        assert_eq!(Countdown::load(&store), Countdown::default());

        let countdown = Countdown { minutes: 7, seconds: 30, is_running: true };
        countdown.save(&store);
        assert_eq!(store.raw(KEY_POMODORO_MINUTES).as_deref(), Some("7"));
        assert_eq!(store.raw(KEY_POMODORO_ACTIVE).as_deref(), Some("true"));
        assert_eq!(Countdown::load(&store.clone()), countdown);
    }
}
