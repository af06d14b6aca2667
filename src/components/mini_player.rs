//! Mini Player Component
//!
//! Compact transport bar shown while another tab is active.

use leptos::prelude::*;

use crate::context::ShellContext;
use crate::models::Tab;
use crate::store::ShellStateStoreFields;

#[component]
pub fn MiniPlayer(ctx: ShellContext) -> impl IntoView {
    let audio = ctx.state.audio();

    let title = move || {
        audio.with(|a| {
            a.current_song()
                .map(|song| format!("{} · {}", song.name, song.artist))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="mini-player">
            <span class="mini-title">{title}</span>
            <button on:click=move |_| ctx.toggle_play()>
                {move || if audio.with(|a| a.is_playing) { "⏸" } else { "▶" }}
            </button>
            <button on:click=move |_| ctx.toggle_mute()>
                {move || if audio.with(|a| a.muted) { "🔇" } else { "🔊" }}
            </button>
            <input
                type="range"
                min="0"
                max="1"
                step="0.01"
                prop:value=move || audio.with(|a| a.volume)
                on:input=move |ev| {
                    if let Ok(volume) = event_target_value(&ev).parse::<f64>() {
                        ctx.set_volume(volume);
                    }
                }
            />
            <button title="Open player" on:click=move |_| ctx.set_active_tab(Tab::Audio)>"🎵"</button>
        </div>
    }
}
