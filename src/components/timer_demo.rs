//! Timer Demo Components
//!
//! `TimerDemo` mounts and unmounts `TickingChild`; the child owns an
//! interval that must be cleared in its cleanup.

use leptos::prelude::*;

use crate::context::use_config;
use crate::platform::BrowserScheduler;
use crate::state::{visibility_label, Ticker};

#[component]
pub fn TimerDemo() -> impl IntoView {
    let (visible, set_visible) = signal(true);

    view! {
        <div class="timer-demo">
            <button class="btn" on:click=move |_| set_visible.update(|v| *v = !*v)>
                {move || visibility_label(visible.get())}
            </button>
            <Show when=move || visible.get()>
                <TickingChild />
            </Show>
        </div>
    }
}

#[component]
fn TickingChild() -> impl IntoView {
    let config = use_config();
    let (ticks, set_ticks) = signal(0u64);

    let ticker = Ticker::mount(&BrowserScheduler, config.tick_period, move |n| set_ticks.set(n));
    // gloo Interval is !Send, keep it in local arena storage
    let ticker = StoredValue::new_local(ticker);
    on_cleanup(move || {
        ticker.try_update_value(|t| t.unmount());
    });

    view! {
        <div class="ticking-child" style="border: 1px solid blue; padding: 1rem; margin: 1rem 0;">
            <h2>"Child Component Active"</h2>
            <p>"Counter: " {ticks}</p>
        </div>
    }
}
