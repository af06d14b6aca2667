//! Todo List Component
//!
//! Add form with emoji picker, and a drag-reorderable list.
//! Uses leptos-dragdrop with rows as drop targets.

use leptos::prelude::*;

use crate::clock::now_millis;
use crate::collection::Collection;
use crate::config::{EMOJI_PALETTE, KEY_TODOS};
use crate::context::ShellContext;
use crate::models::Todo;

use leptos_dragdrop::*;

#[component]
pub fn TodoList(ctx: ShellContext) -> impl IntoView {
    let (todos, set_todos) = signal(Collection::<Todo, _>::load(ctx.storage, KEY_TODOS));
    let (new_text, set_new_text) = signal(String::new());
    let (emoji, set_emoji) = signal(None::<&'static str>);
    let (picker_open, set_picker_open) = signal(false);

    let dnd = create_dnd_signals();
    bind_global_handlers(dnd, move |from, to| {
        log::debug!("move todo {} -> {}", from, to);
        set_todos.update(|todos| {
            todos.move_item(from, to);
        });
    });

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked();
        set_todos.update(|todos| {
            let id = todos.next_id(now_millis());
            if let Some(todo) = Todo::new(id, &text, emoji.get_untracked()) {
                todos.push(todo);
                set_new_text.set(String::new());
                set_emoji.set(None);
                set_picker_open.set(false);
            }
        });
    };

    let rows = move || todos.with(|todos| todos.items().iter().cloned().enumerate().collect::<Vec<_>>());

    view! {
        <section class="widget todo-list">
            <h2>"To-do"</h2>
            <form class="todo-form" on:submit=add_todo>
                <input
                    type="text"
                    placeholder="Add a task..."
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <button type="button" class="emoji-toggle" on:click=move |_| set_picker_open.update(|open| *open = !*open)>
                    {move || emoji.get().unwrap_or("🙂")}
                </button>
                <button type="submit">"Add"</button>
            </form>

            <Show when=move || picker_open.get()>
                <div class="emoji-picker">
                    {EMOJI_PALETTE.iter().map(|&choice| view! {
                        <button
                            type="button"
                            class=move || if emoji.get() == Some(choice) { "emoji-btn active" } else { "emoji-btn" }
                            on:click=move |_| {
                                set_emoji.set(Some(choice));
                                set_picker_open.set(false);
                            }
                        >
                            {choice}
                        </button>
                    }).collect_view()}
                </div>
            </Show>

            <ul class="todo-items">
                <For
                    each=rows
                    key=|(index, todo)| (*index, todo.id, todo.completed, todo.text.clone(), todo.emoji.clone())
                    children=move |(index, todo)| {
                        let id = todo.id;
                        let row_class = move || {
                            let mut c = String::from("todo-row");
                            if todo.completed { c.push_str(" completed"); }
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
                            >
                                <input
                                    type="checkbox"
                                    prop:checked=todo.completed
                                    on:change=move |_| {
                                        set_todos.update(|todos| {
                                            todos.update(id, |t| t.completed = !t.completed);
                                        });
                                    }
                                />
                                {todo.emoji.clone().map(|e| view! { <span class="todo-emoji">{e}</span> })}
                                <span class="todo-text">{todo.text.clone()}</span>
                                <button
                                    class="delete-btn"
                                    on:click=move |_| {
                                        if dnd.should_suppress_click() { return; }
                                        set_todos.update(|todos| {
                                            todos.remove(id);
                                        });
                                    }
                                >
                                    "×"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
