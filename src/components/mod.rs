//! UI Components
//!
//! One component per widget, plus the shell pieces around them.

mod audio_player;
mod calculator;
mod calendar;
mod help_dialog;
mod mini_player;
mod pomodoro;
mod post_it_notes;
mod tab_rail;
mod todo_list;

pub use audio_player::AudioPlayer;
pub use calculator::CalculatorPad;
pub use calendar::CalendarView;
pub use help_dialog::HelpDialog;
pub use mini_player::MiniPlayer;
pub use pomodoro::PomodoroPanel;
pub use post_it_notes::PostItBoard;
pub use tab_rail::TabRail;
pub use todo_list::TodoList;
