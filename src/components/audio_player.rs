//! Audio Player Component
//!
//! File loading, transport controls and the drag-reorderable playlist.
//! Transport state lives in the shell; this component only renders it.

use leptos::prelude::*;

use crate::audio::{format_time, new_song};
use crate::clock::BrowserRandom;
use crate::context::ShellContext;
use crate::models::Song;
use crate::store::ShellStateStoreFields;

use leptos_dragdrop::*;

#[component]
pub fn AudioPlayer(ctx: ShellContext) -> impl IntoView {
    let audio = ctx.state.audio();
    let notice = ctx.state.media_notice();

    let dnd = create_dnd_signals();
    bind_global_handlers(dnd, move |from, to| {
        log::debug!("move song {} -> {}", from, to);
        ctx.move_song(from, to);
    });

    let on_files = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(files) = input.files() else {
            return;
        };
        let mut rng = BrowserRandom;
        let songs: Vec<Song> = (0..files.length())
            .filter_map(|i| files.get(i))
            .filter_map(|file| match web_sys::Url::create_object_url_with_blob(&file) {
                Ok(url) => Some(new_song(&file.name(), url, &mut rng)),
                Err(e) => {
                    log::warn!("cannot load {}: {:?}", file.name(), e);
                    None
                }
            })
            .collect();
        ctx.add_songs(songs);
        // Allow picking the same files again
        input.set_value("");
    };

    let rows = move || audio.with(|a| a.playlist.iter().cloned().enumerate().collect::<Vec<_>>());
    let current_index = move || audio.with(|a| a.current);
    let is_playing = move || audio.with(|a| a.is_playing);

    view! {
        <section class="widget audio-player">
            <div class="widget-header">
                <h2>"Music"</h2>
                <label class="file-btn">
                    "Add songs"
                    <input type="file" accept="audio/*" multiple on:change=on_files />
                </label>
            </div>

            <div class="now-playing">
                {move || audio.with(|a| match a.current_song() {
                    Some(song) => view! {
                        <span class="song-name">{song.name.clone()}</span>
                        <span class="song-artist">{song.artist.clone()}</span>
                    }.into_any(),
                    None => view! { <span class="song-name empty">"No songs loaded"</span> }.into_any(),
                })}
            </div>

            <div class="seek-row">
                <span>{move || audio.with(|a| format_time(a.current_time))}</span>
                <input
                    type="range"
                    min="0"
                    step="any"
                    prop:max=move || audio.with(|a| if a.duration.is_finite() { a.duration } else { 0.0 })
                    prop:value=move || audio.with(|a| a.current_time)
                    on:input=move |ev| {
                        if let Ok(time) = event_target_value(&ev).parse::<f64>() {
                            ctx.seek(time);
                        }
                    }
                />
                <span>{move || audio.with(|a| format_time(a.duration))}</span>
            </div>

            <div class="transport">
                <button on:click=move |_| ctx.play_previous()>"⏮"</button>
                <button class="primary-btn" on:click=move |_| ctx.toggle_play()>
                    {move || if is_playing() { "⏸" } else { "▶" }}
                </button>
                <button on:click=move |_| ctx.play_next()>"⏭"</button>
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
            </div>

            {move || notice.get().map(|message| view! {
                <div class="media-notice">
                    <span>{format!("Playback failed: {}", message)}</span>
                    <button on:click=move |_| ctx.dismiss_notice()>"×"</button>
                </div>
            })}

            <ol class="playlist">
                <For
                    each=rows
                    key=|(index, song)| (*index, song.id.clone())
                    children=move |(index, song)| {
                        let row_class = move || {
                            let mut c = String::from("playlist-row");
                            if current_index() == index { c.push_str(" current"); }
                            if dnd.is_dragging(index) { c.push_str(" dragging"); }
                            if dnd.is_drop_target(index) { c.push_str(" drop-target"); }
                            c
                        };
                        view! {
                            <li
                                class=row_class
                                on:mousedown=make_on_mousedown(dnd, index)
                                on:mouseenter=make_on_row_mouseenter(dnd, index)
                                on:mouseleave=make_on_mouseleave(dnd)
                                on:click=move |_| {
                                    if dnd.should_suppress_click() { return; }
                                    ctx.select_track(index);
                                }
                            >
                                <span class="song-name">{song.name}</span>
                                <span class="song-artist">{song.artist}</span>
                            </li>
                        }
                    }
                />
            </ol>
        </section>
    }
}
