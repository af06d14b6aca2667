//! Deskboard Frontend Entry Point

mod app;
mod audio;
mod calculator;
mod calendar;
mod clock;
mod collection;
mod components;
mod config;
mod context;
mod logging;
mod models;
mod notes;
mod pomodoro;
mod reorder;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(config::LOG_LEVEL);
    mount_to_body(App);
}
