//! Counter Demo Component
//!
//! Local state only: four buttons driving a `Counter`.

use leptos::prelude::*;

use crate::state::Counter;

#[component]
pub fn CounterDemo() -> impl IntoView {
    let (counter, set_counter) = signal(Counter::default());

    view! {
        <div class="counter-container">
            <h2>"Counter"</h2>
            <h4>
                "You clicked " <span class="count">{move || counter.get().value()}</span> " times"
            </h4>
            <div class="button-group">
                <button class="btn" on:click=move |_| set_counter.update(Counter::increment)>
                    "Click me"
                </button>
                <button class="btn" on:click=move |_| set_counter.update(Counter::decrement)>
                    "Decrease me"
                </button>
                <button class="btn reset-btn" on:click=move |_| set_counter.update(Counter::reset)>
                    "Reset"
                </button>
                <button class="btn double-btn" on:click=move |_| set_counter.update(Counter::double_increment)>
                    "Double Increment"
                </button>
            </div>
        </div>
    }
}
