//! Calculator Component
//!
//! Keypad plus keyboard input. The keydown listener is bound to the
//! component's lifetime.

use leptos::prelude::*;

use crate::calculator::{is_input_key, Calculator};
use crate::config::CALCULATOR_KEYS;

#[component]
pub fn CalculatorPad() -> impl IntoView {
    let (calc, set_calc) = signal(Calculator::default());

    let press = move |key: &str| match key {
        "=" => set_calc.update(Calculator::evaluate),
        key => set_calc.update(|c| c.press(key)),
    };

    let keydown = window_event_listener(leptos::ev::keydown, move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        if key == "Enter" {
            ev.prevent_default();
            set_calc.update(Calculator::evaluate);
        } else if is_input_key(&key) {
            set_calc.update(|c| c.press(&key));
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
        <section class="widget calculator">
            <h2>"Calculator"</h2>
            <div class="calculator-display">{move || calc.with(|c| c.display().to_string())}</div>
            <div class="calculator-keys">
                {CALCULATOR_KEYS.iter().map(|&key| view! {
                    <button
                        class=if key == "=" { "calc-key equals" } else { "calc-key" }
                        on:click=move |_| press(key)
                    >
                        {key}
                    </button>
                }).collect_view()}
                <button class="calc-key clear" on:click=move |_| set_calc.update(Calculator::clear)>"C"</button>
            </div>
        </section>
    }
}
