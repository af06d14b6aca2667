//! Deskboard App
//!
//! Shell component: header, tab rail, the active widget, the mini-player
//! and the page's media element. Owns the effects that push shell state
//! into the DOM (dark class, media element, pomodoro interval).

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::components::{
    AudioPlayer, CalculatorPad, CalendarView, HelpDialog, MiniPlayer, PomodoroPanel, PostItBoard, TabRail, TodoList,
};
use crate::config::theme;
use crate::context::ShellContext;
use crate::models::Tab;
use crate::storage::BrowserStorage;
use crate::store::{ShellState, ShellStateStoreFields, ShellStore};

const TICK_MS: u32 = 1_000;

#[component]
pub fn App() -> impl IntoView {
    let storage = BrowserStorage;
    let state: ShellStore = ShellStore::new(ShellState::load(&storage));
    let ctx = ShellContext::new(state, storage);

    log::info!("shell ready on tab {}", state.active_tab().get_untracked().as_str());

    // Dark mode lives on <html> so the page background follows it
    Effect::new(move |_| {
        let dark = state.dark_mode().get();
        if let Some(root) = document().document_element() {
            if let Err(e) = root.class_list().toggle_with_force("dark", dark) {
                log::warn!("toggle dark class: {:?}", e);
            }
        }
    });

    // Pomodoro tick: the interval lives exactly as long as the running flag
    let timer_running = Memo::new(move |_| state.countdown().with(|c| c.is_running));
    Effect::new(move |_: Option<Option<Interval>>| {
        if timer_running.get() {
            log::debug!("pomodoro started");
            Some(Interval::new(TICK_MS, move || ctx.tick()))
        } else {
            None
        }
    });

    bind_media_element(ctx);

    let shell_class = move || {
        let mut class = String::from("app-shell ");
        class.push_str(theme(state.theme_index().get()).class);
        class
    };

    let active_widget = move || match state.active_tab().get() {
        Tab::Calendar => view! { <CalendarView ctx=ctx /> }.into_any(),
        Tab::Todo => view! { <TodoList ctx=ctx /> }.into_any(),
        Tab::Calculator => view! { <CalculatorPad /> }.into_any(),
        Tab::PostIt => view! { <PostItBoard ctx=ctx /> }.into_any(),
        Tab::Pomodoro => view! { <PomodoroPanel ctx=ctx /> }.into_any(),
        Tab::Audio => view! { <AudioPlayer ctx=ctx /> }.into_any(),
    };

    let show_mini_player = move || {
        state.active_tab().get() != Tab::Audio && state.audio().with(|audio| !audio.playlist.is_empty())
    };

    view! {
        <div class=shell_class>
            <header class="app-header">
                <h1>"Deskboard"</h1>
                <div class="header-actions">
                    <button
                        class="icon-btn"
                        title=move || format!("Theme: {}", theme(state.theme_index().get()).name)
                        on:click=move |_| ctx.cycle_theme()
                    >
                        "🎨"
                    </button>
                    <button class="icon-btn" title="Dark mode" on:click=move |_| ctx.toggle_dark_mode()>
                        {move || if state.dark_mode().get() { "☀" } else { "🌙" }}
                    </button>
                    <button class="icon-btn" title="Help" on:click=move |_| ctx.toggle_help()>
                        "?"
                    </button>
                </div>
            </header>

            <div class="app-body">
                <TabRail ctx=ctx />
                <main class="widget-area">{active_widget}</main>
            </div>

            <Show when=show_mini_player>
                <MiniPlayer ctx=ctx />
            </Show>

            <HelpDialog ctx=ctx />

            <audio
                node_ref=ctx.media
                on:timeupdate=move |_| {
                    if let Some(element) = ctx.media.get_untracked() {
                        ctx.media_progress(element.current_time(), element.duration());
                    }
                }
                on:loadedmetadata=move |_| {
                    if let Some(element) = ctx.media.get_untracked() {
                        ctx.metadata_loaded(element.duration());
                    }
                }
                on:ended=move |_| ctx.track_ended()
            />
        </div>
    }
}

/// Mirror transport state into the `<audio>` element
fn bind_media_element(ctx: ShellContext) {
    let state = ctx.state;
    let source = Memo::new(move |_| state.audio().with(|a| a.current_song().map(|song| song.url.clone())));
    let playing = Memo::new(move |_| state.audio().with(|a| a.is_playing));
    let level = Memo::new(move |_| state.audio().with(|a| (a.volume, a.muted)));

    Effect::new(move |_| {
        let source = source.get();
        let playing = playing.get();
        let Some(element) = ctx.media.get() else {
            return;
        };

        match source {
            Some(url) if element.src() != url => element.set_src(&url),
            None if !element.src().is_empty() => {
                if let Err(e) = element.remove_attribute("src") {
                    log::warn!("clear media source: {:?}", e);
                }
            }
            _ => {}
        }

        if playing {
            match element.play() {
                Ok(promise) => spawn_local(async move {
                    if let Err(err) = JsFuture::from(promise).await {
                        if error_name(&err).as_deref() != Some("AbortError") {
                            ctx.playback_failed(describe(&err));
                        }
                    }
                }),
                Err(err) => ctx.playback_failed(describe(&err)),
            }
        } else if let Err(e) = element.pause() {
            log::warn!("pause: {:?}", e);
        }
    });

    Effect::new(move |_| {
        let (volume, muted) = level.get();
        if let Some(element) = ctx.media.get() {
            element.set_volume(volume);
            element.set_muted(muted);
        }
    });
}

fn error_name(err: &JsValue) -> Option<String> {
    js_sys::Reflect::get(err, &JsValue::from_str("name")).ok()?.as_string()
}

fn describe(err: &JsValue) -> String {
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}
