//! Post-it Notes Component

use leptos::prelude::*;

use crate::clock::{now_millis, BrowserRandom};
use crate::collection::Collection;
use crate::config::KEY_POST_IT_NOTES;
use crate::context::ShellContext;
use crate::models::PostItNote;
use crate::notes::new_note;

#[component]
pub fn PostItBoard(ctx: ShellContext) -> impl IntoView {
    let (notes, set_notes) = signal(Collection::<PostItNote, _>::load(ctx.storage, KEY_POST_IT_NOTES));

    let add_note = move |_| {
        set_notes.update(|notes| {
            let id = notes.next_id(now_millis());
            notes.push(new_note(id, &mut BrowserRandom));
        });
    };

    // Keyed by id only so typing does not recreate the textarea
    let cards = move || notes.with(|notes| notes.items().to_vec());

    view! {
        <section class="widget post-it-notes">
            <div class="widget-header">
                <h2>"Notes"</h2>
                <button class="primary-btn" on:click=add_note>"+ Note"</button>
            </div>
            <div class="post-it-grid">
                <For
                    each=cards
                    key=|note| note.id
                    children=move |note| {
                        let id = note.id;
                        let style = format!("background-color: {}; color: {};", note.color, note.text_color);
                        view! {
                            <div class="post-it" style=style>
                                <textarea
                                    prop:value=note.content.clone()
                                    on:input=move |ev| {
                                        let content = event_target_value(&ev);
                                        set_notes.update(|notes| {
                                            notes.update(id, |n| n.content = content);
                                        });
                                    }
                                />
                                <button
                                    class="delete-btn"
                                    on:click=move |_| set_notes.update(|notes| {
                                        notes.remove(id);
                                    })
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    }
                />
            </div>
        </section>
    }
}
