//! Calendar Component
//!
//! Month grid with event markers, the add/edit form and the month's
//! event listing.

use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;

use crate::calendar::{events_in_month, has_event_on, month_grid, month_start, month_title, shift_month, EventDraft};
use crate::clock::{now_millis, today};
use crate::collection::Collection;
use crate::config::KEY_CALENDAR_EVENTS;
use crate::context::ShellContext;
use crate::models::Event;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[component]
pub fn CalendarView(ctx: ShellContext) -> impl IntoView {
    let (events, set_events) = signal(Collection::<Event, _>::load(ctx.storage, KEY_CALENDAR_EVENTS));
    let (month, set_month) = signal(month_start(today()));
    let (draft, set_draft) = signal(EventDraft::default());

    let confirm = move || {
        set_events.update(|events| {
            set_draft.update(|draft| {
                if draft.confirm(events, now_millis()) {
                    log::debug!("event saved");
                }
            });
        });
    };

    let delete = move |id: i64| {
        set_events.update(|events| {
            events.remove(id);
        });
        set_draft.update(|draft| draft.forget(id));
    };

    let grid = move || {
        let today = today();
        let shown = month.get();
        month_grid(shown)
            .into_iter()
            .map(|day| {
                let date = day.date;
                let marked = move || events.with(|events| has_event_on(events.items(), date));
                let selected = move || draft.with(|d| d.selected == Some(date));
                let cell_class = move || {
                    let mut c = String::from("day-cell");
                    if !day.in_month { c.push_str(" outside"); }
                    if date == today { c.push_str(" today"); }
                    if selected() { c.push_str(" selected"); }
                    if marked() { c.push_str(" has-event"); }
                    c
                };
                view! {
                    <button class=cell_class on:click=move |_| set_draft.update(|d| d.select(date))>
                        {date.day()}
                    </button>
                }
            })
            .collect_view()
    };

    let listing = move || {
        let shown = month.get();
        events.with(|events| {
            events_in_month(events.items(), shown).cloned().collect::<Vec<Event>>()
        })
    };

    view! {
        <section class="widget calendar">
            <div class="calendar-header">
                <button on:click=move |_| set_month.update(|m| *m = shift_month(*m, -1))>"‹"</button>
                <h2>{move || month_title(month.get())}</h2>
                <button on:click=move |_| set_month.update(|m| *m = shift_month(*m, 1))>"›"</button>
            </div>

            <div class="calendar-grid">
                {WEEKDAYS.iter().map(|name| view! { <span class="weekday">{*name}</span> }).collect_view()}
                {grid}
            </div>

            <form class="event-form" on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                confirm();
            }>
                <span class="event-form-date">
                    {move || draft.with(|d| match d.selected {
                        Some(date) => format_date(date),
                        None => "Pick a day".to_string(),
                    })}
                </span>
                <input
                    type="text"
                    placeholder="Event title"
                    prop:value=move || draft.with(|d| d.title.clone())
                    on:input=move |ev| {
                        let title = event_target_value(&ev);
                        set_draft.update(|d| d.title = title);
                    }
                />
                <button type="submit">
                    {move || if draft.with(EventDraft::is_editing) { "Update" } else { "Add" }}
                </button>
                <Show when=move || draft.with(EventDraft::is_editing)>
                    <button type="button" on:click=move |_| set_draft.update(EventDraft::reset)>"Cancel"</button>
                </Show>
            </form>

            <ul class="event-list">
                <For
                    each=listing
                    key=|event| (event.id, event.date, event.title.clone())
                    children=move |event| {
                        let id = event.id;
                        let date = format_date(event.date);
                        let title = event.title.clone();
                        let editing = move || draft.with(|d| d.editing == Some(id));
                        view! {
                            <li class=move || if editing() { "event-row editing" } else { "event-row" }>
                                <span class="event-date">{date}</span>
                                <span class="event-title">{title}</span>
                                <button on:click=move |_| set_draft.update(|d| d.edit(&event))>"Edit"</button>
                                <button class="delete-btn" on:click=move |_| delete(id)>"×"</button>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%a %-d %b").to_string()
}
