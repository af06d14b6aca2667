//! Pomodoro Component
//!
//! Display and controls over the shell's countdown.

use leptos::prelude::*;

use crate::context::ShellContext;
use crate::store::ShellStateStoreFields;

#[component]
pub fn PomodoroPanel(ctx: ShellContext) -> impl IntoView {
    let countdown = ctx.state.countdown();

    view! {
        <section class="widget pomodoro">
            <h2>"Pomodoro"</h2>
            <div class="pomodoro-display">{move || countdown.with(|c| c.display())}</div>
            <div class="pomodoro-controls">
                <button
                    class="primary-btn"
                    disabled=move || countdown.with(|c| !c.is_running && c.is_finished())
                    on:click=move |_| ctx.toggle_timer()
                >
                    {move || if countdown.with(|c| c.is_running) { "Pause" } else { "Start" }}
                </button>
                <button on:click=move |_| ctx.reset_timer()>"Reset"</button>
            </div>
        </section>
    }
}
