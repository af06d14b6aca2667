//! Help Dialog Component

use leptos::prelude::*;

use crate::context::ShellContext;
use crate::store::ShellStateStoreFields;

/// Modal with the help text of the active tab
#[component]
pub fn HelpDialog(ctx: ShellContext) -> impl IntoView {
    let state = ctx.state;

    view! {
        <Show when=move || state.show_help().get()>
            <div class="modal-backdrop" on:click=move |_| ctx.toggle_help()>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h2>{move || format!("{} help", state.active_tab().get().label())}</h2>
                    <p>{move || state.active_tab().get().help()}</p>
                    <button class="modal-close" on:click=move |_| ctx.toggle_help()>"Close"</button>
                </div>
            </div>
        </Show>
    }
}
