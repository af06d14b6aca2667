//! Tab Rail Component
//!
//! Vertical bar for switching between widgets.

use leptos::prelude::*;

use crate::context::ShellContext;
use crate::models::Tab;
use crate::store::ShellStateStoreFields;

#[component]
pub fn TabRail(ctx: ShellContext) -> impl IntoView {
    let active_tab = ctx.state.active_tab();

    view! {
        <nav class="tab-rail">
            {Tab::ALL.into_iter().map(|tab| {
                let tab_class = move || {
                    if active_tab.get() == tab { "tab-btn active" } else { "tab-btn" }
                };
                view! {
                    <button
                        class=tab_class
                        title=tab.label()
                        on:click=move |_| ctx.set_active_tab(tab)
                    >
                        <span class="tab-icon">{tab.icon()}</span>
                        <span class="tab-label">{tab.label()}</span>
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
